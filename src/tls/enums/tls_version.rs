/// Protocol versions accepted in `min_version` / `max_version`.
///
/// Ordered from oldest to newest so ranges can be compared directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TlsVersion {
    Tls10,
    Tls11,
    Tls12,
    Tls13,
}
