//! Contract name to output key transformation

/// Converts a CamelCase contract name to a snake_case output key.
///
/// The literal `"NFT"` is first normalized to `"Nft"` (first occurrence
/// only) so the acronym becomes a single segment. A literal `.` directly
/// before an uppercase letter is consumed as a segment boundary.
///
/// # Examples
///
/// ```
/// use partyabi_core::camel_to_snake;
///
/// assert_eq!(camel_to_snake("PartyGovernanceNFT"), "party_governance_nft");
/// assert_eq!(camel_to_snake("TokenDistributor"), "token_distributor");
/// ```
pub fn camel_to_snake(name: &str) -> String {
    let normalized = name.replacen("NFT", "Nft", 1);

    let mut segments: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut chars = normalized.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '.' && chars.peek().is_some_and(|next| next.is_ascii_uppercase()) {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_ascii_uppercase() && !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }

        current.push(c);
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments.join("_").to_lowercase()
}
