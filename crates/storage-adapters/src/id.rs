use domains::IdGenerator;
use uuid::Uuid;

/// Random v4 UUIDs in their 32-char simple form, so ids read `thread-<hex>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_distinct_hex_tokens() {
        let generator = UuidIdGenerator;
        let a = generator.generate();
        let b = generator.generate();

        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
