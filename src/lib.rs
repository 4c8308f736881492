pub mod constants;
pub mod flyby_errors;
pub mod hyperbolic_orbit;
pub mod kepler;
pub mod plot;
pub mod time;
pub mod trajectory;
