// Error taxonomy: every failure maps onto one flat kind, through every wrapper.

#[cfg(test)]
mod tests {
    use sectok_core::headers::{extract_str, from_request};
    use sectok_core::token::SecretToken;
    use sectok_core::{ErrorKind, SectokError};

    fn kind_of(err: impl Into<SectokError>) -> ErrorKind {
        err.into().kind()
    }

    #[test]
    fn token_kinds() {
        assert_eq!(kind_of(SecretToken::new("").unwrap_err()), ErrorKind::EmptyToken);
        assert_eq!(kind_of(SecretToken::from_bytes(vec![0x80]).unwrap_err()), ErrorKind::InvalidUtf8);
        assert_eq!(kind_of(SecretToken::parse("secret-token:").unwrap_err()), ErrorKind::InvalidFormat);
        assert_eq!(kind_of(SecretToken::parse("secret-token:%").unwrap_err()), ErrorKind::InvalidEscape);
    }

    #[test]
    fn header_kinds() {
        assert_eq!(kind_of(extract_str("").unwrap_err()), ErrorKind::MissingHeader);
        assert_eq!(kind_of(extract_str("token").unwrap_err()), ErrorKind::MalformedHeader);
        assert_eq!(kind_of(from_request::<()>(None).unwrap_err()), ErrorKind::InvalidArgument);
    }

    #[test]
    fn wrapped_token_errors_keep_their_kind() {
        assert_eq!(kind_of(extract_str("Bearer: x").unwrap_err()), ErrorKind::InvalidFormat);
        assert_eq!(kind_of(extract_str("Bearer: secret-token:%8").unwrap_err()), ErrorKind::InvalidEscape);
        assert_eq!(kind_of(extract_str("Bearer: secret-token:%C3").unwrap_err()), ErrorKind::InvalidUtf8);
    }

    #[test]
    fn question_mark_converts_across_layers() {
        fn pipeline(value: &str) -> Result<SecretToken, SectokError> {
            let tok = extract_str(value)?;
            let again = SecretToken::parse(&tok.serialize())?;
            Ok(again)
        }

        assert!(pipeline("Bearer: secret-token:ok").is_ok());
        assert_eq!(pipeline("nope").unwrap_err().kind(), ErrorKind::MalformedHeader);
    }

    #[test]
    fn messages_do_not_leak_payload() {
        let err = SecretToken::parse("secret-token:hunter2%zz").unwrap_err();
        assert!(!err.to_string().contains("hunter2"));

        let err = extract_str("Bearer: secret-token:hunter2%80").unwrap_err();
        assert!(!SectokError::from(err).to_string().contains("hunter2"));
    }

    #[test]
    fn kind_names_are_stable() {
        assert_eq!(ErrorKind::EmptyToken.to_string(), "empty_token");
        assert_eq!(ErrorKind::MalformedHeader.as_str(), "malformed_header");
    }
}
