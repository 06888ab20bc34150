/// Increments the last contiguous run of ASCII digits in `text`.
///
/// The run keeps its width: `"rc.002"` becomes `"rc.003"`. A carry out of the
/// leading digit widens it (`"99"` becomes `"100"`). Returns the rebuilt
/// string and whether a run was found; without one, `text` comes back as is.
pub fn bump_last_digit_run(text: &str) -> (String, bool) {
    let bytes = text.as_bytes();
    let Some(end) = bytes.iter().rposition(u8::is_ascii_digit).map(|i| i + 1) else {
        return (text.to_owned(), false);
    };
    let start = bytes[..end]
        .iter()
        .rposition(|b| !b.is_ascii_digit())
        .map_or(0, |i| i + 1);

    let mut digits = bytes[start..end].to_vec();
    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            carry = false;
            break;
        }
    }

    let mut out = String::with_capacity(text.len() + 1);
    out.push_str(&text[..start]);
    if carry {
        out.push('1');
    }
    // Only ASCII digits were touched, so the bytes are still valid UTF-8.
    out.extend(digits.iter().map(|&b| b as char));
    out.push_str(&text[end..]);
    (out, true)
}

#[cfg(test)]
mod tests {
    use super::bump_last_digit_run;

    #[test]
    fn preserves_zero_padding() {
        assert_eq!(bump_last_digit_run("002"), ("003".to_owned(), true));
        assert_eq!(bump_last_digit_run("rc.042"), ("rc.043".to_owned(), true));
    }

    #[test]
    fn only_the_last_run_changes() {
        assert_eq!(
            bump_last_digit_run("---rc.042.1"),
            ("---rc.042.2".to_owned(), true)
        );
        assert_eq!(bump_last_digit_run("rc.1.2.3"), ("rc.1.2.4".to_owned(), true));
        assert_eq!(bump_last_digit_run("rc1-beta"), ("rc2-beta".to_owned(), true));
    }

    #[test]
    fn no_digits() {
        assert_eq!(bump_last_digit_run("abc"), ("abc".to_owned(), false));
        assert_eq!(bump_last_digit_run(""), (String::new(), false));
    }

    #[test]
    fn carry_widens_run() {
        assert_eq!(bump_last_digit_run("rc.9"), ("rc.10".to_owned(), true));
        assert_eq!(bump_last_digit_run("099"), ("100".to_owned(), true));
        assert_eq!(bump_last_digit_run("x999y"), ("x1000y".to_owned(), true));
    }

    #[test]
    fn runs_longer_than_any_integer() {
        let long = "9".repeat(40);
        let (bumped, found) = bump_last_digit_run(&long);
        assert!(found);
        assert_eq!(bumped, format!("1{}", "0".repeat(40)));
    }

    #[test]
    fn multibyte_text_around_run() {
        assert_eq!(bump_last_digit_run("é7ü"), ("é8ü".to_owned(), true));
    }
}
