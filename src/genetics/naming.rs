//! Offspring name synthesis

use crate::core::config::BreedingConfig;

/// Build an offspring name from the parents' names
///
/// Long enough names are spliced: the first half of the first name followed
/// by the second half of the second, both halves split at `len / 2`
/// (characters, not bytes). Otherwise the names are concatenated with the
/// configured suffix.
pub fn offspring_name(first: &str, second: &str, config: &BreedingConfig) -> String {
    let first_len = first.chars().count();
    let second_len = second.chars().count();

    if first_len >= config.min_blend_name_len && second_len >= config.min_blend_name_len {
        let head = first.chars().take(first_len / 2);
        let tail = second.chars().skip(second_len / 2);
        head.chain(tail).collect()
    } else {
        format!("{}{}{}", first, second, config.short_name_suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(a: &str, b: &str) -> String {
        offspring_name(a, b, &BreedingConfig::default())
    }

    #[test]
    fn test_spliced_name() {
        // "Em" + "ost"
        assert_eq!(name("Ember", "Frost"), "Emost");
        assert_eq!(name("Blaze", "Solar"), "Bllar");
    }

    #[test]
    fn test_short_names_get_suffix() {
        assert_eq!(name("Al", "Bo"), "AlBoJr");
        assert_eq!(name("Al", "Thunder"), "AlThunderJr");
        assert_eq!(name("", "Storm"), "StormJr");
    }

    #[test]
    fn test_three_letter_names_splice() {
        // floor(3 / 2) = 1 on both sides
        assert_eq!(name("Ash", "Ivy"), "Avy");
    }

    #[test]
    fn test_splits_on_characters() {
        // "Öl" + "skø"
        assert_eq!(name("Öland", "Ærøskø"), "Ölskø");
    }

    #[test]
    fn test_custom_suffix_and_threshold() {
        let config = BreedingConfig {
            min_blend_name_len: 6,
            short_name_suffix: "II".into(),
            ..Default::default()
        };
        assert_eq!(offspring_name("Ember", "Frost", &config), "EmberFrostII");
    }
}
