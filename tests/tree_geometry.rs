// tests/tree_geometry.rs
use arbor_lsystem::{
    BranchSegment, InterpreterConfig, LeafSize, TreeError, TreePreset, TurtleInterpreter,
    TurtleOp, TurtleState, expand, interpret,
};
use glam::Vec3;

const EPS: f32 = 1e-5;

#[test]
fn test_single_step() {
    let tree = interpret("F", 1.0, 25.0).unwrap();

    assert_eq!(tree.branches.len(), 1);
    assert!(tree.leaves.is_empty());

    let branch = &tree.branches[0];
    assert_eq!(branch.start, Vec3::ZERO);
    assert_eq!(branch.angle_x, 0.0);
    assert_eq!(branch.angle_z, 0.0);
    assert_eq!(branch.displacement(), Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(branch.end(), Vec3::Y);
}

#[test]
fn test_branch_does_not_affect_trunk() {
    let tree = interpret("[F]F", 1.0, 25.0).unwrap();

    assert_eq!(tree.branches.len(), 2);
    let (side, trunk) = (&tree.branches[0], &tree.branches[1]);
    assert_eq!(side.start, Vec3::ZERO);
    assert_eq!(trunk.start, Vec3::ZERO);
    assert_eq!(side.angle_x, trunk.angle_x);
    assert_eq!(side.angle_z, trunk.angle_z);
}

#[test]
fn test_pop_restores_angles() {
    let tree = interpret("F[+/F]F", 1.0, 30.0).unwrap();
    let trunk = &tree.branches[2];
    assert_eq!(trunk.start, Vec3::Y);
    assert_eq!((trunk.angle_x, trunk.angle_z), (0.0, 0.0));

    let side = &tree.branches[1];
    assert_eq!((side.angle_x, side.angle_z), (30.0, 30.0));
}

#[test]
fn test_unmatched_close_fails() {
    let err = interpret("]", 1.0, 25.0).unwrap_err();
    assert!(matches!(
        err,
        TreeError::MalformedInput {
            index: 0,
            symbol: ']'
        }
    ));

    let err = interpret("F[F]]F", 1.0, 25.0).unwrap_err();
    assert!(matches!(err, TreeError::MalformedInput { index: 4, .. }));
}

#[test]
fn test_turn_axes() {
    let cases = [
        ("+F", Vec3::Z),
        ("-F", Vec3::NEG_Z),
        ("/F", Vec3::X),
        ("|F", Vec3::NEG_X),
    ];
    for (symbols, expected) in cases {
        let tree = interpret(symbols, 1.0, 90.0).unwrap();
        let end = tree.branches[0].end();
        assert!(
            end.abs_diff_eq(expected, EPS),
            "{symbols}: expected {expected}, got {end}"
        );
    }
}

#[test]
fn test_turns_accumulate() {
    let tree = interpret("++F--F", 1.0, 45.0).unwrap();
    assert_eq!(tree.branches[0].angle_x, 90.0);
    assert_eq!(tree.branches[1].angle_x, 0.0);
    assert!(tree.branches[1].start.abs_diff_eq(Vec3::Z, EPS));
}

#[test]
fn test_steps_chain() {
    let tree = interpret("FF", 2.0, 25.0).unwrap();
    assert_eq!(tree.branches[1].start, Vec3::new(0.0, 2.0, 0.0));
    assert_eq!(tree.branches[1].end(), Vec3::new(0.0, 4.0, 0.0));
    assert_eq!(tree.branches[1].length, 2.0);
}

#[test]
fn test_segment_and_turtle_stay_consistent() {
    let symbols = expand("X", 3, &TreePreset::Canopy.rules());
    let tree = interpret(&symbols, 1.5, 25.0).unwrap();

    // Every branch after the first starts where some earlier branch ended.
    for (i, branch) in tree.branches.iter().enumerate().skip(1) {
        let attached = tree.branches[..i]
            .iter()
            .any(|prev| prev.end().abs_diff_eq(branch.start, 1e-4));
        assert!(attached, "branch {i} is floating");
    }
}

#[test]
fn test_leaf_positions() {
    let tree = interpret("FDFS", 1.0, 25.0).unwrap();
    assert_eq!(tree.leaves.len(), 2);
    assert_eq!(tree.leaves[0].size, LeafSize::Medium);
    assert_eq!(tree.leaves[0].position, Vec3::Y);
    assert_eq!(tree.leaves[1].size, LeafSize::Large);
    assert_eq!(tree.leaves[1].position, Vec3::new(0.0, 2.0, 0.0));

    let tree = interpret("FL", 1.0, 25.0).unwrap();
    assert_eq!(tree.leaves[0].size, LeafSize::Small);
    assert_eq!(tree.leaves[0].position, Vec3::Y);
}

#[test]
fn test_small_leaf_uses_last_step_target() {
    // `L` sits where the most recent step ended, even after `]` moved the
    // turtle back. `D` sits at the restored position.
    let tree = interpret("F[+F]LD", 1.0, 90.0).unwrap();
    let (small, medium) = (&tree.leaves[0], &tree.leaves[1]);

    assert!(small.position.abs_diff_eq(Vec3::new(0.0, 1.0, 1.0), EPS));
    assert_eq!(medium.position, Vec3::Y);

    // Before any step the target is the origin.
    let tree = interpret("L", 1.0, 25.0).unwrap();
    assert_eq!(tree.leaves[0].position, Vec3::ZERO);
}

#[test]
fn test_unknown_symbols_ignored() {
    let tree = interpret("XYZ F&^\\", 1.0, 25.0).unwrap();
    assert_eq!(tree.branches.len(), 1);
    assert!(tree.leaves.is_empty());
    assert_eq!(TurtleOp::from_symbol('X'), TurtleOp::Ignore);
    assert_eq!(TurtleOp::from_symbol('S'), TurtleOp::Leaf(LeafSize::Large));
}

#[test]
fn test_unclosed_branch_is_allowed() {
    let tree = interpret("[F", 1.0, 25.0).unwrap();
    assert_eq!(tree.branches.len(), 1);
}

#[test]
fn test_invalid_parameters() {
    for step in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        let err = interpret("F", step, 25.0).unwrap_err();
        assert!(
            matches!(err, TreeError::InvalidParameter { name: "step_length", .. }),
            "step {step} accepted"
        );
    }

    let err = interpret("F", 1.0, f32::NAN).unwrap_err();
    assert!(matches!(err, TreeError::InvalidParameter { name: "turn_angle", .. }));
}

#[test]
fn test_presets_are_balanced() {
    for preset in TreePreset::ALL {
        let symbols = expand(preset.axiom(), 5, &preset.rules());
        let tree = interpret(&symbols, 1.0, 25.0).unwrap();
        assert_eq!(
            tree.branches.len(),
            symbols.chars().filter(|&c| c == 'F').count()
        );
    }
}

#[test]
fn test_interpretation_is_deterministic() {
    let symbols = expand("X", 4, &TreePreset::Shrub.rules());
    let interpreter = TurtleInterpreter::new(InterpreterConfig::new(1.0, 22.5));
    assert_eq!(
        interpreter.interpret(&symbols).unwrap(),
        interpreter.interpret(&symbols).unwrap()
    );
}

#[test]
fn test_branch_cylinder_placement() {
    let branch = BranchSegment {
        start: Vec3::ZERO,
        length: 2.0,
        angle_x: 0.0,
        angle_z: 0.0,
    };
    assert_eq!(branch.center(), Vec3::Y);
    assert!((branch.radius() - 0.4).abs() < EPS);

    let cylinder = branch.to_cylinder();
    assert!((cylinder.radius - 0.4).abs() < EPS);
    assert!((cylinder.half_height - 1.0).abs() < EPS);

    let tilted = BranchSegment {
        angle_x: 40.0,
        angle_z: -15.0,
        ..branch
    };
    let axis = tilted.rotation() * Vec3::Y;
    assert!(axis.abs_diff_eq(tilted.direction(), EPS));
    assert!((tilted.direction().length() - 1.0).abs() < EPS);
}

#[test]
fn test_leaf_spheres_and_bounds() {
    let tree = interpret("F[+F]LDS", 1.0, 90.0).unwrap();
    let radii: Vec<f32> = tree.leaves.iter().map(|l| l.to_sphere().radius).collect();
    assert_eq!(radii, vec![0.5, 1.0, 1.5]);

    let (min, max) = tree.bounds().unwrap();
    assert!(min.abs_diff_eq(Vec3::ZERO, EPS));
    assert!(max.abs_diff_eq(Vec3::new(0.0, 1.0, 1.0), EPS));

    assert!(interpret("+-", 1.0, 25.0).unwrap().bounds().is_none());
}

#[test]
fn test_turtle_step_matches_emitted_branch() {
    let turtle = TurtleState {
        position: Vec3::new(1.0, 2.0, 3.0),
        angle_x: 25.0,
        angle_z: -50.0,
    };
    let branch = BranchSegment {
        start: turtle.position,
        length: 1.5,
        angle_x: turtle.angle_x,
        angle_z: turtle.angle_z,
    };

    assert_eq!(turtle.heading(), branch.direction());
    assert!(turtle.step_target(1.5).abs_diff_eq(branch.end(), EPS));
}
