// 로그 출력 시 민감정보 마스킹
// Masks PII before it reaches the logs

/// 토큰 마스킹 (앞 4자리만 표시)
/// Mask a token, keeping the first 4 characters
pub fn mask_token(token: &str) -> String {
    if token.is_empty() {
        return String::new();
    }
    if token.chars().count() <= 4 {
        return "****".to_string();
    }
    let head: String = token.chars().take(4).collect();
    format!("{}****", head)
}

/// 이메일 마스킹 (아이디 절반만 표시)
/// Mask an email, keeping half of the local part
pub fn mask_email(email: &str) -> String {
    let Some((local, domain)) = email.split_once('@') else {
        // 이메일 형식이 아니면 토큰 마스킹으로 처리
        return mask_token(email);
    };

    let chars: Vec<char> = local.chars().collect();
    let visible = (chars.len() / 2).max(1).min(chars.len());
    let head: String = chars[..visible].iter().collect();
    format!("{}***@{}", head, domain)
}

/// 이름 마스킹 (첫 글자만 표시)
/// Mask a name, keeping the first character
pub fn mask_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if name.chars().count() >= 2 => format!("{}**", first),
        _ => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("eyJhbGciOiJIUzI1NiJ9"), "eyJh****");
        assert_eq!(mask_token("abc"), "****");
        assert_eq!(mask_token(""), "");
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("tester@gmail.com"), "tes***@gmail.com");
        assert_eq!(mask_email("a@b.com"), "a***@b.com");
        // 형식이 아니면 토큰 마스킹
        assert_eq!(mask_email("not-an-email"), "not-****");
    }

    #[test]
    fn test_mask_name() {
        assert_eq!(mask_name("김철수"), "김**");
        assert_eq!(mask_name("John"), "J**");
        assert_eq!(mask_name("a"), "***");
    }
}
