use http::header::{HeaderName, AUTHORIZATION};

/// URI scheme for canonical secret tokens.
pub const URI_SCHEME: &str = "secret-token";

/// Scheme plus separator; every canonical token starts with this.
/// "secret-token:" = 13 bytes
pub const URI_PREFIX: &str = "secret-token:";

/// Canonical URI pattern. At least one character must follow the colon.
pub const URI_PATTERN: &str = r"^secret-token:[A-Za-z0-9\-._~%]+$";

/// Header field carrying the token.
pub const HEADER_KEY: HeaderName = AUTHORIZATION;

/// Wrapper prefix of the header value (note the single space after the colon).
pub const HEADER_VALUE_PREFIX: &str = "Bearer: ";

/// Escape marker used by the percent-encoding.
pub const ESCAPE_BYTE: u8 = b'%';

/// Length of one `%XX` escape.
pub const ESCAPE_LEN: usize = 3;
