//! 四种变换的行为与还原性

use encdec::{Algorithm, CipherError, Mode, Variant, decrypt, encrypt, select_variant};

const PRINTABLE_NON_LETTERS: &str = " !\"#$%&'()*+,-./0123456789:;<=>?@[\\]^_`{|}~";

#[test]
fn shift_encrypts_and_decrypts_hello() {
    assert_eq!(encrypt("Hello", 3, Algorithm::Shift).unwrap(), "Khoor");
    assert_eq!(decrypt("Khoor", 3, Algorithm::Shift).unwrap(), "Hello");
}

#[test]
fn shift_wraps_past_end_of_alphabet() {
    // 'y' = 24, 24 + 3 = 27 > 26 -> 27 % 26 = 1
    assert_eq!(encrypt("yz YZ", 3, Algorithm::Shift).unwrap(), "bc BC");
    assert_eq!(decrypt("bc BC", 3, Algorithm::Shift).unwrap(), "yz YZ");
    // 'x' = 23, 23 + 4 = 27
    assert_eq!(encrypt("xyz", 4, Algorithm::Shift).unwrap(), "bcd");
    assert_eq!(decrypt("bcd", 4, Algorithm::Shift).unwrap(), "xyz");
}

#[test]
fn shift_leaves_non_letters_untouched() {
    for key in 0..26 {
        assert_eq!(
            encrypt(PRINTABLE_NON_LETTERS, key, Algorithm::Shift).unwrap(),
            PRINTABLE_NON_LETTERS
        );
        assert_eq!(
            decrypt(PRINTABLE_NON_LETTERS, key, Algorithm::Shift).unwrap(),
            PRINTABLE_NON_LETTERS
        );
    }

    assert_eq!(encrypt("é ß 中", 5, Algorithm::Shift).unwrap(), "é ß 中");
}

#[test]
fn shift_roundtrips_every_letter_except_the_boundary() {
    for key in 0..26 {
        for (position, letter) in ('A'..='Z').chain('a'..='z').enumerate() {
            let position = (position % 26) as i32;
            let text = letter.to_string();
            let encrypted = encrypt(&text, key, Algorithm::Shift);

            if position + key == 26 {
                assert!(
                    matches!(
                        encrypted,
                        Err(CipherError::OutOfAlphabet { ch, shift }) if ch == letter && shift == key
                    ),
                    "expected {letter} with key {key} to fall off the alphabet"
                );
                continue;
            }

            let encrypted = encrypted.unwrap();
            assert_eq!(encrypted.chars().count(), 1);
            assert_eq!(decrypt(&encrypted, key, Algorithm::Shift).unwrap(), text);
        }
    }
}

#[test]
fn shift_boundary_fails_the_whole_text() {
    // 'Z' = 25, 25 + 1 = 26，没有取模
    assert!(encrypt("AZ", 1, Algorithm::Shift).is_err());
    assert!(encrypt("az", 1, Algorithm::Shift).is_err());
    // 'A' = 0, 0 + 26 = 26
    assert!(encrypt("A", 26, Algorithm::Shift).is_err());
    // 超过 26 时取模
    assert_eq!(encrypt("A", 27, Algorithm::Shift).unwrap(), "B");
}

#[test]
fn shift_rejects_keys_outside_one_wrap() {
    assert!(encrypt("a", -1, Algorithm::Shift).is_err());
    assert!(decrypt("a", 27, Algorithm::Shift).is_err());
    assert!(decrypt("z", -1, Algorithm::Shift).is_err());
    assert!(encrypt("b", i32::MAX, Algorithm::Shift).is_err());
    assert!(decrypt("b", i32::MIN, Algorithm::Shift).is_err());
}

#[test]
fn unicode_shifts_every_code_point() {
    assert_eq!(encrypt("A", 1, Algorithm::Unicode).unwrap(), "B");
    assert_eq!(encrypt("a b1!", 1, Algorithm::Unicode).unwrap(), "b!c2\"");
    assert_eq!(decrypt("b!c2\"", 1, Algorithm::Unicode).unwrap(), "a b1!");
}

#[test]
fn unicode_skips_the_surrogate_gap() {
    assert_eq!(
        encrypt("\u{D7FF}", 1, Algorithm::Unicode).unwrap(),
        "\u{E000}"
    );
    assert_eq!(
        decrypt("\u{E000}", 1, Algorithm::Unicode).unwrap(),
        "\u{D7FF}"
    );
    assert_eq!(
        encrypt("\u{10FFFF}", 1, Algorithm::Unicode).unwrap(),
        "\u{0}"
    );
}

#[test]
fn unicode_roundtrips_for_any_key() {
    let text = "Hello, World! 0123 é ß 中文 🦀 \u{D7FF}\u{E000}\u{10FFFF}\u{0}";

    for key in [0, 1, 3, 25, 26, 1000, -7, 0x10_0000, i32::MAX, i32::MIN] {
        let encrypted = encrypt(text, key, Algorithm::Unicode).unwrap();
        assert_eq!(encrypted.chars().count(), text.chars().count());
        assert_eq!(decrypt(&encrypted, key, Algorithm::Unicode).unwrap(), text);
    }
}

#[test]
fn select_variant_covers_every_combination() {
    assert_eq!(
        select_variant(Mode::Encrypt, "shift").unwrap(),
        Variant::ShiftEncrypt
    );
    assert_eq!(
        select_variant(Mode::Decrypt, "shift").unwrap(),
        Variant::ShiftDecrypt
    );
    assert_eq!(
        select_variant(Mode::Encrypt, "unicode").unwrap(),
        Variant::UnicodeEncrypt
    );
    assert_eq!(
        select_variant(Mode::Decrypt, "unicode").unwrap(),
        Variant::UnicodeDecrypt
    );

    let err = select_variant(Mode::Encrypt, "Shift").unwrap_err();
    assert!(matches!(err, CipherError::UnknownAlgorithm(name) if name == "Shift"));
}

#[test]
fn algorithm_names_match_flag_values() {
    for algorithm in [Algorithm::Shift, Algorithm::Unicode] {
        assert_eq!(Algorithm::from_name(algorithm.name()), Some(algorithm));
    }
    assert_eq!(Algorithm::from_name("rot13"), None);
}

#[test]
fn empty_text_stays_empty() {
    for algorithm in [Algorithm::Shift, Algorithm::Unicode] {
        assert_eq!(encrypt("", 5, algorithm).unwrap(), "");
        assert_eq!(decrypt("", 5, algorithm).unwrap(), "");
    }
}
