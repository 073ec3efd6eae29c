//! Built-in campaign levels.

use super::{GravityClass, LevelSpec, SourceSpec};

/// Default collision radius of a black hole body.
const BLACK_HOLE_RADIUS: f64 = 15.0;

/// Default collision radius of a repulsor well.
const REPULSOR_RADIUS: f64 = 20.0;

/// All built-in levels, in campaign order.
pub static LEVELS: &[LevelSpec] = &[
    TUTORIAL,
    HEAVY_PLANET,
    REPULSOR_INTRO,
    BLACK_HOLE_GAUNTLET,
    GRAVITY_MAZE,
    OBSTACLE_COURSE,
    PUSH_AND_PULL,
    BINARY_BLACK_HOLES,
    FINAL_CHALLENGE,
];

const fn planet(x: f64, y: f64, base_mass: f64, radius: f64, class: GravityClass) -> SourceSpec {
    SourceSpec {
        x,
        y,
        base_mass,
        radius,
        class,
        repulsive: false,
    }
}

const fn black_hole(x: f64, y: f64, base_mass: f64) -> SourceSpec {
    SourceSpec {
        x,
        y,
        base_mass,
        radius: BLACK_HOLE_RADIUS,
        class: GravityClass::Normal,
        repulsive: false,
    }
}

const fn repulsor(x: f64, y: f64, base_mass: f64) -> SourceSpec {
    SourceSpec {
        x,
        y,
        base_mass,
        radius: REPULSOR_RADIUS,
        class: GravityClass::Normal,
        repulsive: true,
    }
}

pub static TUTORIAL: LevelSpec = LevelSpec {
    name: "Tutorial",
    description: "A single planet between you and the goal. Curve around it.",
    start: (100.0, 300.0),
    goal: (700.0, 300.0, 25.0),
    sources: &[planet(400.0, 300.0, 80.0, 25.0, GravityClass::Normal)],
    obstacles: &[],
    max_shots: 3,
};

pub static HEAVY_PLANET: LevelSpec = LevelSpec {
    name: "Heavy Planet Challenge",
    description: "Heavy planets pull twice as hard. Slingshot around the mass.",
    start: (100.0, 400.0),
    goal: (400.0, 150.0, 25.0),
    sources: &[planet(400.0, 300.0, 100.0, 35.0, GravityClass::Heavy)],
    obstacles: &[],
    max_shots: 2,
};

pub static REPULSOR_INTRO: LevelSpec = LevelSpec {
    name: "Repulsor Introduction",
    description: "Repulsor wells push you away. Use one to dodge the obstacle.",
    start: (100.0, 300.0),
    goal: (750.0, 300.0, 25.0),
    sources: &[
        repulsor(400.0, 250.0, 60.0),
        planet(600.0, 350.0, 80.0, 25.0, GravityClass::Light),
    ],
    obstacles: &[(350.0, 300.0, 20.0)],
    max_shots: 3,
};

pub static BLACK_HOLE_GAUNTLET: LevelSpec = LevelSpec {
    name: "Black Hole Gauntlet",
    description: "A dense mass with a small body. One wrong move ends the flight.",
    start: (100.0, 500.0),
    goal: (650.0, 150.0, 25.0),
    sources: &[
        black_hole(400.0, 300.0, 400.0),
        planet(250.0, 200.0, 60.0, 20.0, GravityClass::Light),
    ],
    obstacles: &[],
    max_shots: 2,
};

pub static GRAVITY_MAZE: LevelSpec = LevelSpec {
    name: "Gravity Maze",
    description: "Three planets of very different pull. Thread the maze.",
    start: (50.0, 300.0),
    goal: (800.0, 300.0, 25.0),
    sources: &[
        planet(200.0, 150.0, 80.0, 28.0, GravityClass::SuperHeavy),
        planet(450.0, 400.0, 90.0, 30.0, GravityClass::Variable),
        planet(650.0, 200.0, 100.0, 25.0, GravityClass::Light),
    ],
    obstacles: &[(400.0, 250.0, 15.0)],
    max_shots: 4,
};

pub static OBSTACLE_COURSE: LevelSpec = LevelSpec {
    name: "The Obstacle Course",
    description: "Dodge the debris while gravity bends your path.",
    start: (80.0, 400.0),
    goal: (700.0, 200.0, 25.0),
    sources: &[
        planet(300.0, 500.0, 100.0, 30.0, GravityClass::Normal),
        repulsor(450.0, 150.0, 70.0),
    ],
    obstacles: &[
        (200.0, 350.0, 18.0),
        (350.0, 250.0, 15.0),
        (500.0, 400.0, 20.0),
    ],
    max_shots: 3,
};

pub static PUSH_AND_PULL: LevelSpec = LevelSpec {
    name: "Push and Pull",
    description: "Repulsors and heavy planets fight over your trajectory.",
    start: (100.0, 100.0),
    goal: (750.0, 400.0, 25.0),
    sources: &[
        repulsor(250.0, 200.0, 80.0),
        planet(400.0, 300.0, 120.0, 35.0, GravityClass::Heavy),
        repulsor(550.0, 150.0, 60.0),
        planet(300.0, 450.0, 90.0, 25.0, GravityClass::Variable),
    ],
    obstacles: &[(450.0, 200.0, 12.0)],
    max_shots: 4,
};

pub static BINARY_BLACK_HOLES: LevelSpec = LevelSpec {
    name: "Binary Black Holes",
    description: "Two dense masses create chaotic pulls. Expert flying only.",
    start: (50.0, 400.0),
    goal: (800.0, 100.0, 25.0),
    sources: &[
        black_hole(300.0, 200.0, 350.0),
        black_hole(500.0, 400.0, 350.0),
        planet(150.0, 250.0, 60.0, 20.0, GravityClass::Light),
        repulsor(650.0, 300.0, 100.0),
    ],
    obstacles: &[],
    max_shots: 3,
};

pub static FINAL_CHALLENGE: LevelSpec = LevelSpec {
    name: "The Final Challenge",
    description: "Every kind of body in one field.",
    start: (80.0, 500.0),
    goal: (850.0, 300.0, 25.0),
    sources: &[
        planet(200.0, 400.0, 100.0, 30.0, GravityClass::SuperHeavy),
        repulsor(400.0, 200.0, 80.0),
        black_hole(500.0, 350.0, 400.0),
        planet(350.0, 500.0, 70.0, 22.0, GravityClass::Light),
        planet(700.0, 400.0, 90.0, 28.0, GravityClass::Heavy),
        repulsor(750.0, 150.0, 60.0),
    ],
    obstacles: &[(300.0, 300.0, 18.0), (600.0, 250.0, 15.0)],
    max_shots: 5,
};
