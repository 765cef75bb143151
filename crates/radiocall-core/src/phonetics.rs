//! ICAO radiotelephony spelling of digits, letters and structured values.

/// Spoken form of a single digit character.
fn digit_word(c: char) -> Option<&'static str> {
    let word = match c {
        '0' => "zero",
        '1' => "one",
        '2' => "two",
        '3' => "three",
        '4' => "four",
        '5' => "five",
        '6' => "six",
        '7' => "seven",
        '8' => "eight",
        '9' => "niner",
        _ => return None,
    };
    Some(word)
}

/// NATO spelling of a single letter, case-insensitive.
fn letter_word(c: char) -> Option<&'static str> {
    let word = match c.to_ascii_uppercase() {
        'A' => "Alpha",
        'B' => "Bravo",
        'C' => "Charlie",
        'D' => "Delta",
        'E' => "Echo",
        'F' => "Foxtrot",
        'G' => "Golf",
        'H' => "Hotel",
        'I' => "India",
        'J' => "Juliet",
        'K' => "Kilo",
        'L' => "Lima",
        'M' => "Mike",
        'N' => "November",
        'O' => "Oscar",
        'P' => "Papa",
        'Q' => "Quebec",
        'R' => "Romeo",
        'S' => "Sierra",
        'T' => "Tango",
        'U' => "Uniform",
        'V' => "Victor",
        'W' => "Whiskey",
        'X' => "X-ray",
        'Y' => "Yankee",
        'Z' => "Zulu",
        _ => return None,
    };
    Some(word)
}

/// Speak digits: `"4521"` -> `"four five two one"`.
///
/// Non-digit characters are kept as they are. Grouped pronunciation is not
/// supported, so `individual = false` returns the input untouched.
pub fn digits_to_phonetic(s: &str, individual: bool) -> String {
    if !individual {
        return s.to_string();
    }
    s.chars()
        .map(|c| digit_word(c).map_or_else(|| c.to_string(), str::to_string))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Spell letters: `"AB"` -> `"Alpha Bravo"`.
pub fn letters_to_phonetic(s: &str) -> String {
    s.chars()
        .map(|c| letter_word(c).map_or_else(|| c.to_string(), str::to_string))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Speak a runway designator: `"25L"` -> `"two five left"`.
///
/// Characters other than digits and L/R/C are dropped.
pub fn runway_to_phonetic(designator: &str) -> String {
    designator
        .chars()
        .filter_map(|c| match c {
            'L' => Some("left"),
            'R' => Some("right"),
            'C' => Some("center"),
            _ => digit_word(c),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Speak a frequency: `"119.850"` -> `"one one niner decimal eight five zero"`.
pub fn frequency_to_phonetic(frequency: &str) -> String {
    frequency
        .split('.')
        .map(|part| digits_to_phonetic(part, true))
        .collect::<Vec<_>>()
        .join(" decimal ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_individual() {
        assert_eq!(digits_to_phonetic("4521", true), "four five two one");
        assert_eq!(digits_to_phonetic("090", true), "zero niner zero");
    }

    #[test]
    fn test_digits_grouped_passthrough() {
        assert_eq!(digits_to_phonetic("4521", false), "4521");
    }

    #[test]
    fn test_digits_unknown_characters_kept() {
        assert_eq!(digits_to_phonetic("1a", true), "one a");
    }

    #[test]
    fn test_letters() {
        assert_eq!(letters_to_phonetic("AB"), "Alpha Bravo");
        assert_eq!(letters_to_phonetic("oe"), "Oscar Echo");
        assert_eq!(letters_to_phonetic("X"), "X-ray");
    }

    #[test]
    fn test_letters_unmapped_passthrough() {
        assert_eq!(letters_to_phonetic("D-1"), "Delta - 1");
    }

    #[test]
    fn test_runway() {
        assert_eq!(runway_to_phonetic("25L"), "two five left");
        assert_eq!(runway_to_phonetic("07R"), "zero seven right");
        assert_eq!(runway_to_phonetic("18C"), "one eight center");
        assert_eq!(runway_to_phonetic("09"), "zero niner");
    }

    #[test]
    fn test_runway_skips_unrecognized() {
        assert_eq!(runway_to_phonetic("RWY 25X"), "right two five");
    }

    #[test]
    fn test_frequency() {
        assert_eq!(
            frequency_to_phonetic("119.850"),
            "one one niner decimal eight five zero"
        );
        assert_eq!(frequency_to_phonetic("121"), "one two one");
    }
}
