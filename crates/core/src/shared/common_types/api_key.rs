/// An API key as presented by a client, with the `ApiKey ` scheme removed.
///
/// No structure is assumed beyond being a non-empty token without whitespace.
pub type ApiKey = String;
