use crate::rng::RandomSource;
use std::sync::Arc;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const TOKEN_LEN: usize = 16;

/// Produces opaque, prefixed identifiers for orders and payments.
///
/// Collisions are improbable but not prevented here; the store rejects a
/// duplicate insert.
#[derive(Clone)]
pub struct IdGenerator {
    pub random: Arc<dyn RandomSource>,
}

impl IdGenerator {
    pub fn order_id(&self) -> String {
        format!("order_{}", self.token())
    }

    pub fn payment_id(&self) -> String {
        format!("pay_{}", self.token())
    }

    fn token(&self) -> String {
        (0..TOKEN_LEN)
            .map(|_| {
                let idx = self.random.next_in_range(0, ALPHABET.len() as u64 - 1);
                ALPHABET[idx as usize] as char
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ThreadRandom;

    fn generator() -> IdGenerator {
        IdGenerator {
            random: Arc::new(ThreadRandom),
        }
    }

    #[test]
    fn order_ids_are_prefixed_tokens() {
        let id = generator().order_id();
        let token = id.strip_prefix("order_").expect("order_ prefix");
        assert_eq!(token.len(), 16);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn payment_ids_are_prefixed_tokens() {
        let id = generator().payment_id();
        let token = id.strip_prefix("pay_").expect("pay_ prefix");
        assert_eq!(token.len(), 16);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn consecutive_ids_differ() {
        let ids = generator();
        assert_ne!(ids.payment_id(), ids.payment_id());
    }
}
