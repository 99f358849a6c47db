use static_assertions::const_assert;

pub struct Variable {
    pub default: f32,
    pub min: f32,
    pub max: f32,
}

pub struct Range {
    pub min: f32,
    pub max: f32,
}

pub const POPULATION: Variable = Variable {
    default: 100.0,
    min: 0.0,
    max: 400.0,
};
pub const CONNECTION_DISTANCE: Variable = Variable {
    default: 150.0,
    min: 10.0,
    max: 300.0,
};
pub const SPEED_FACTOR: Variable = Variable {
    default: 1.0,
    min: 0.1,
    max: 10.0,
};

// per-axis, units per frame
pub const MAX_SPEED: f32 = 0.25;
pub const RADIUS: Range = Range { min: 0.5, max: 2.5 };
pub const OPACITY: Range = Range { min: 0.2, max: 0.7 };

pub const LINE_MAX_OPACITY: f32 = 0.2;
pub const LINE_WIDTH: f32 = 0.5;

const_assert!(POPULATION.min >= 0.0 && POPULATION.default <= POPULATION.max);
const_assert!(CONNECTION_DISTANCE.min > 0.0);
const_assert!(SPEED_FACTOR.min > 0.0);
const_assert!(MAX_SPEED > 0.0);
const_assert!(RADIUS.min > 0.0 && RADIUS.min < RADIUS.max);
const_assert!(OPACITY.min > 0.0 && OPACITY.max < 1.0 && OPACITY.min < OPACITY.max);
