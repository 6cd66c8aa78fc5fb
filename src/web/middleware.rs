use actix_web::middleware::DefaultHeaders;

const CONTENT_SECURITY_POLICY: &str =
    "default-src 'self'; style-src 'self' 'unsafe-inline'; img-src 'self' data:; frame-ancestors 'none'";

/// Security headers attached to every response.
pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        // Prevent clickjacking
        .add(("X-Frame-Options", "DENY"))
        // Prevent MIME sniffing
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("Referrer-Policy", "strict-origin-when-cross-origin"))
        .add(("Content-Security-Policy", CONTENT_SECURITY_POLICY))
}
