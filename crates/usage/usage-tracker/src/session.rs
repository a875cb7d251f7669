use chrono::Utc;
use rand::Rng;

use usage_core::constants::SESSION_ID_PREFIX;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

/// `session_<unix ms>_<9 random base-36 chars>`.
pub fn generate_session_id() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| char::from(BASE36[rng.random_range(0..BASE36.len())]))
        .collect();
    format!(
        "{}_{}_{}",
        SESSION_ID_PREFIX,
        Utc::now().timestamp_millis(),
        suffix
    )
}

/// Bernoulli trial with probability `rate`. Rates at or above 1 always
/// keep, rates at or below 0 never do.
pub fn sampled_in(rate: f64) -> bool {
    if rate >= 1.0 {
        return true;
    }
    if rate <= 0.0 || rate.is_nan() {
        return false;
    }
    rand::rng().random::<f64>() < rate
}
