const PERSIAN_ZERO: u32 = '۰' as u32;
const ARABIC_INDIC_ZERO: u32 = '٠' as u32;

/// Replace Persian (U+06F0..U+06F9) and Arabic-Indic (U+0660..U+0669) digits
/// with their ASCII counterparts. Every other character is kept as is.
pub fn to_english_digits(input: &str) -> String {
    input.chars().map(to_english_digit).collect()
}

fn to_english_digit(c: char) -> char {
    let code = c as u32;
    let offset = match code {
        _ if (PERSIAN_ZERO..PERSIAN_ZERO + 10).contains(&code) => code - PERSIAN_ZERO,
        _ if (ARABIC_INDIC_ZERO..ARABIC_INDIC_ZERO + 10).contains(&code) => code - ARABIC_INDIC_ZERO,
        _ => return c,
    };
    char::from_digit(offset, 10).unwrap_or(c)
}
