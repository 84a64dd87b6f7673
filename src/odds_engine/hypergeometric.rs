use crate::odds_engine::combinatorics::log_combinations;

/// Probability of exactly `successes_in_sample` successes when drawing
/// `sample_size` items without replacement from `population` items, of
/// which `successes_in_population` are successes.
///
/// `C(K, x) · C(N−K, n−x) / C(N, n)`, evaluated in log space. Any
/// impossible combination of arguments yields 0.
pub fn hypergeometric(
    population: i64,
    successes_in_population: i64,
    sample_size: i64,
    successes_in_sample: i64,
) -> f64 {
    if sample_size < 0
        || successes_in_sample < 0
        || sample_size > population
        || successes_in_sample > successes_in_population
        || sample_size - successes_in_sample > population - successes_in_population
    {
        return 0.0;
    }

    let log_p = log_combinations(successes_in_population, successes_in_sample)
        + log_combinations(population - successes_in_population, sample_size - successes_in_sample)
        - log_combinations(population, sample_size);
    log_p.exp()
}
