/// Source of uniform random draws. Every service that synthesizes data
/// takes one of these instead of reaching for an ambient generator, so
/// callers can substitute a deterministic source.
pub trait RandomSource: Send {
    /// Uniform draw from [0.0, 1.0).
    fn next_unit(&mut self) -> f64;
}
