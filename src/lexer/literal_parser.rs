//! リテラルの解析

/// 文字列のエスケープシーケンスを処理
///
/// JavaScriptの規則に従い、認識されないエスケープはその文字自身になる
/// （`"\q"` は `"q"`）。
pub fn unescape_string(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some('n') => result.push('\n'),
                Some('r') => result.push('\r'),
                Some('t') => result.push('\t'),
                Some('b') => result.push('\u{0008}'),
                Some('f') => result.push('\u{000C}'),
                Some('v') => result.push('\u{000B}'),
                Some('0') => result.push('\0'),
                Some('\\') => result.push('\\'),
                Some('"') => result.push('"'),
                Some('\'') => result.push('\''),
                Some('x') => {
                    // 16進数エスケープ（\xNN）
                    let mut hex = String::new();
                    if let Some(h1) = chars.next() {
                        hex.push(h1);
                    }
                    if let Some(h2) = chars.next() {
                        hex.push(h2);
                    }
                    if let Ok(byte) = u8::from_str_radix(&hex, 16) {
                        result.push(byte as char);
                    } else {
                        // 無効な16進数エスケープ
                        result.push('x');
                        result.push_str(&hex);
                    }
                }
                Some('u') => match chars.next() {
                    // Unicodeエスケープ（\u{NNNN}）
                    Some('{') => {
                        let mut hex = String::new();
                        loop {
                            match chars.next() {
                                Some('}') => break,
                                Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                                _ => break,
                            }
                        }
                        match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                            Some(ch) => result.push(ch),
                            None => result.push_str(&format!("u{{{}}}", hex)),
                        }
                    }
                    // Unicodeエスケープ（\uNNNN）
                    Some(h) if h.is_ascii_hexdigit() => {
                        let mut hex = String::new();
                        hex.push(h);
                        for _ in 0..3 {
                            if let Some(c) = chars.next() {
                                hex.push(c);
                            }
                        }
                        match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                            Some(ch) => result.push(ch),
                            None => {
                                result.push('u');
                                result.push_str(&hex);
                            }
                        }
                    }
                    Some(c) => {
                        result.push('u');
                        result.push(c);
                    }
                    None => result.push('u'),
                },
                Some(c) => result.push(c),
                None => result.push('\\'), // 文字列の終端
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// 16進数リテラルを解析（`0x1F` 形式）
pub fn parse_hex_number(s: &str) -> Option<f64> {
    let digits = s.get(2..)?;
    u64::from_str_radix(digits, 16).ok().map(|n| n as f64)
}
