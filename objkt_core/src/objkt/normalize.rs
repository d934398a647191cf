use super::dto::{RawListing, RawToken, Token};

pub const IPFS_SCHEME: &str = "ipfs://";
pub const IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";
pub const OBJKT_TOKENS_URL: &str = "https://objkt.com/tokens";
/// hic et nunc OBJKT contract, used when a token carries no FA contract
pub const DEFAULT_FA_CONTRACT: &str = "KT1RJ6PbjHpwc3M5rw5s2Nbmefwbuwbdxton";

/// Turns a raw GraphQL token into its display form. Pure: the same input
/// always yields the same output.
pub fn normalize_token(raw: &RawToken) -> Token {
    let price = raw
        .listings
        .as_deref()
        .and_then(<[RawListing]>::first)
        .and_then(format_price);

    Token {
        token_id: raw.token_id.clone(),
        name: display_name(raw.name.as_deref(), &raw.token_id),
        description: raw.description.clone(),
        supply: raw.supply.as_ref().and_then(|supply| supply.as_u64()),
        mime: raw.mime.clone(),
        asset_url: ipfs_to_gateway(resolve_asset_uri(raw)),
        thumbnail_url: ipfs_to_gateway(resolve_thumbnail_uri(raw)),
        price,
        timestamp: raw.timestamp.clone(),
        objkt_url: marketplace_url(raw.fa_contract.as_deref(), &raw.token_id),
    }
}

/// Returns the first candidate that is present and non-empty.
pub fn first_present<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|candidate| !candidate.is_empty())
}

/// Asset precedence: `display_uri`, then `artifact_uri`, then
/// `thumbnail_uri`, then the empty string.
pub fn resolve_asset_uri(raw: &RawToken) -> &str {
    first_present(&[
        raw.display_uri.as_deref(),
        raw.artifact_uri.as_deref(),
        raw.thumbnail_uri.as_deref(),
    ])
    .unwrap_or_default()
}

pub fn resolve_thumbnail_uri(raw: &RawToken) -> &str {
    first_present(&[raw.thumbnail_uri.as_deref()]).unwrap_or_default()
}

/// Rewrites `ipfs://` URIs onto the public HTTP gateway; anything else is
/// returned untouched.
pub fn ipfs_to_gateway(uri: &str) -> String {
    if uri.starts_with(IPFS_SCHEME) {
        uri.replace(IPFS_SCHEME, IPFS_GATEWAY)
    } else {
        uri.to_string()
    }
}

pub fn display_name(name: Option<&str>, token_id: &str) -> String {
    match first_present(&[name]) {
        Some(name) => name.to_string(),
        None => format!("Token #{token_id}"),
    }
}

pub fn marketplace_url(fa_contract: Option<&str>, token_id: &str) -> String {
    let contract = first_present(&[fa_contract]).unwrap_or(DEFAULT_FA_CONTRACT);
    format!("{OBJKT_TOKENS_URL}/{contract}/{token_id}")
}

/// Formats a listing as `"<amount> <symbol>"` where amount is the raw price
/// shifted by the currency decimals. `None` when the price, symbol or
/// decimals are missing.
pub fn format_price(listing: &RawListing) -> Option<String> {
    let raw_price = listing.price.as_ref()?.as_f64()?;
    let currency = listing.currency.as_ref()?;
    let symbol = currency.symbol.as_deref()?;
    let decimals = i32::try_from(currency.decimals.as_ref()?.as_u64()?).ok()?;
    let amount = raw_price / 10f64.powi(decimals);

    Some(format!("{} {symbol}", format_decimal(amount)))
}

// Shortest round-trip form with a trailing `.0` on integral values, and
// exponent notation outside [1e-4, 1e16), e.g. `1.0`, `0.25`, `1e-05`.
fn format_decimal(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && magnitude.is_finite() && !(1e-4..1e16).contains(&magnitude) {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{mantissa}e{sign}{digits:0>2}")
            }
            None => formatted,
        };
    }

    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objkt::dto::RawCurrency;
    use serde_json::Number;

    fn listing(price: u64, decimals: u32, symbol: &str) -> RawListing {
        RawListing {
            price: Some(Number::from(price)),
            currency: Some(RawCurrency {
                symbol: Some(symbol.to_string()),
                decimals: Some(Number::from(decimals)),
            }),
        }
    }

    fn raw_token(token_id: &str) -> RawToken {
        RawToken {
            token_id: token_id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_price_is_decimal_adjusted() {
        assert_eq!(
            format_price(&listing(1_000_000, 6, "XTZ")),
            Some("1.0 XTZ".to_string())
        );
        assert_eq!(
            format_price(&listing(2_500_000, 6, "XTZ")),
            Some("2.5 XTZ".to_string())
        );
        assert_eq!(
            format_price(&listing(1_234_567, 6, "XTZ")),
            Some("1.234567 XTZ".to_string())
        );
        assert_eq!(format_price(&listing(5, 0, "USDT")), Some("5.0 USDT".to_string()));
    }

    #[test]
    fn test_price_uses_exponent_for_tiny_amounts() {
        assert_eq!(format_price(&listing(1, 5, "XTZ")), Some("1e-05 XTZ".to_string()));
    }

    #[test]
    fn test_price_absent_without_listing_or_currency() {
        let token = raw_token("3");
        assert!(normalize_token(&token).price.is_none());

        let no_currency = RawListing {
            price: Some(Number::from(10u64)),
            currency: None,
        };
        assert!(format_price(&no_currency).is_none());

        let no_symbol = RawListing {
            price: Some(Number::from(10u64)),
            currency: Some(RawCurrency {
                symbol: None,
                decimals: Some(Number::from(6u32)),
            }),
        };
        assert!(format_price(&no_symbol).is_none());
    }

    #[test]
    fn test_price_takes_first_listing() {
        let token = RawToken {
            listings: Some(vec![listing(500_000, 6, "XTZ"), listing(9_000_000, 6, "XTZ")]),
            ..raw_token("9")
        };
        assert_eq!(normalize_token(&token).price.as_deref(), Some("0.5 XTZ"));
    }

    #[test]
    fn test_missing_or_empty_name_falls_back_to_token_id() {
        assert_eq!(normalize_token(&raw_token("12")).name, "Token #12");

        let empty = RawToken {
            name: Some(String::new()),
            ..raw_token("13")
        };
        assert_eq!(normalize_token(&empty).name, "Token #13");

        let named = RawToken {
            name: Some("Ñandú".to_string()),
            ..raw_token("14")
        };
        assert_eq!(normalize_token(&named).name, "Ñandú");
    }

    #[test]
    fn test_ipfs_uris_are_rewritten() {
        for uri in ["ipfs://QmHash", "ipfs://QmHash/ipfs://nested", "ipfs://"] {
            let url = ipfs_to_gateway(uri);
            assert!(url.starts_with(IPFS_GATEWAY));
            assert!(!url.contains(IPFS_SCHEME));
        }
        assert_eq!(ipfs_to_gateway("https://example.com/a.png"), "https://example.com/a.png");
        assert_eq!(ipfs_to_gateway(""), "");
    }

    #[test]
    fn test_asset_uri_precedence() {
        let token = RawToken {
            display_uri: Some(String::new()),
            artifact_uri: Some("ipfs://artifact".to_string()),
            thumbnail_uri: Some("ipfs://thumb".to_string()),
            ..raw_token("1")
        };
        let normalized = normalize_token(&token);
        assert_eq!(normalized.asset_url, "https://ipfs.io/ipfs/artifact");
        assert_eq!(normalized.thumbnail_url, "https://ipfs.io/ipfs/thumb");

        let display = RawToken {
            display_uri: Some("ipfs://display".to_string()),
            ..token.clone()
        };
        assert_eq!(normalize_token(&display).asset_url, "https://ipfs.io/ipfs/display");

        let thumb_only = RawToken {
            thumbnail_uri: Some("ipfs://thumb".to_string()),
            ..raw_token("2")
        };
        assert_eq!(normalize_token(&thumb_only).asset_url, "https://ipfs.io/ipfs/thumb");

        let nothing = normalize_token(&raw_token("3"));
        assert_eq!(nothing.asset_url, "");
        assert_eq!(nothing.thumbnail_url, "");
    }

    #[test]
    fn test_marketplace_url_defaults_contract() {
        assert_eq!(
            marketplace_url(None, "5"),
            "https://objkt.com/tokens/KT1RJ6PbjHpwc3M5rw5s2Nbmefwbuwbdxton/5"
        );
        assert_eq!(
            marketplace_url(Some(""), "5"),
            "https://objkt.com/tokens/KT1RJ6PbjHpwc3M5rw5s2Nbmefwbuwbdxton/5"
        );
        assert_eq!(
            marketplace_url(Some("KT1abc"), "5"),
            "https://objkt.com/tokens/KT1abc/5"
        );
    }

    #[test]
    fn test_normalization_is_deterministic() {
        let token = RawToken {
            name: Some("Loop".to_string()),
            supply: Some(Number::from(10u64)),
            display_uri: Some("ipfs://d".to_string()),
            fa_contract: Some("KT1xyz".to_string()),
            listings: Some(vec![listing(1_000_000, 6, "XTZ")]),
            ..raw_token("77")
        };
        assert_eq!(normalize_token(&token), normalize_token(&token));
        assert_eq!(normalize_token(&token).supply, Some(10));
    }
}
