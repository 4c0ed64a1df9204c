use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("Index full: all {capacity} slots scanned without a free slot or a match")]
    IndexFull { capacity: usize },

    #[error("Invalid index capacity: {0}")]
    InvalidCapacity(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_full_display() {
        let error = IndexError::IndexFull { capacity: 7 };
        assert_eq!(format!("{}", error), "Index full: all 7 slots scanned without a free slot or a match");
    }

    #[test]
    fn test_invalid_capacity_display() {
        let error = IndexError::InvalidCapacity(0);
        assert_eq!(format!("{}", error), "Invalid index capacity: 0");
    }
}
