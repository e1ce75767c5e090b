use path_engine::graph::{is_traversable, AllowedUses, Mode, ModeEncoding};
use path_engine::Error;

#[test]
fn test_symbol_encoding() {
    let uses = AllowedUses::from_symbols("cb");
    assert!(uses.contains("c"));
    assert!(uses.contains("b"));
    assert!(!uses.permits_all());

    assert!(is_traversable(&Mode::from_symbol('c'), &uses));
    assert!(!is_traversable(&Mode::from_symbol('w'), &uses));
    assert_eq!(Mode::from_symbol('a'), Mode::All);
    assert!(AllowedUses::from_symbols("a").permits_all());
}

#[test]
fn test_token_encoding() {
    let uses = AllowedUses::from_tokens("auto; bike,hov");
    assert_eq!(uses.tokens().collect::<Vec<_>>(), vec!["auto", "bike", "hov"]);

    assert!(is_traversable(&"bike".parse().unwrap(), &uses));
    assert!(!is_traversable(&"walk".parse().unwrap(), &uses));
    // Whole tokens only
    assert!(!is_traversable(&"bik".parse().unwrap(), &uses));
    assert!(AllowedUses::from_tokens("walk;all").permits_all());
}

#[test]
fn test_wildcard_link_admits_every_mode() {
    let uses = AllowedUses::all();
    assert!(is_traversable(&Mode::Token("truck".to_string()), &uses));
    assert!(is_traversable(&Mode::All, &uses));
}

#[test]
fn test_all_mode_ignores_allowed_uses() {
    assert!(is_traversable(&Mode::All, &AllowedUses::none()));
    assert!(is_traversable(&Mode::All, &AllowedUses::from_tokens("bike")));
}

#[test]
fn test_all_token_acts_as_wildcard() {
    let all = Mode::Token("all".to_string());
    assert!(all.is_all());
    assert!(is_traversable(&all, &AllowedUses::from_tokens("bike")));
    assert!(is_traversable(&all, &AllowedUses::none()));
    assert!(!Mode::Token("auto".to_string()).is_all());
}

#[test]
fn test_single_mode_link_rejects_other_modes() {
    let uses = AllowedUses::from_tokens("x");
    assert!(is_traversable(&Mode::Token("x".to_string()), &uses));
    assert!(!is_traversable(&Mode::Token("y".to_string()), &uses));
}

#[test]
fn test_mode_parsing() {
    assert_eq!(Mode::from_token("all").unwrap(), Mode::All);
    assert_eq!(Mode::from_token(" auto ").unwrap(), Mode::Token("auto".to_string()));
    assert!(matches!(Mode::from_token(""), Err(Error::InvalidMode(_))));
    assert!(matches!(Mode::from_token("auto;bike"), Err(Error::InvalidMode(_))));

    assert_eq!(Mode::parse("c", ModeEncoding::Symbol).unwrap(), Mode::Token("c".to_string()));
    assert_eq!(Mode::parse("a", ModeEncoding::Symbol).unwrap(), Mode::All);
    assert!(Mode::parse("car", ModeEncoding::Symbol).is_err());
    assert_eq!(Mode::Token("auto".to_string()).to_string(), "auto");
    assert_eq!(Mode::All.to_string(), "all");
}

#[test]
fn test_duplicate_tokens_collapse() {
    let uses: AllowedUses = ["walk", "walk", "bike"].into_iter().collect();
    assert_eq!(uses.tokens().count(), 2);
    assert_eq!(uses, AllowedUses::from_tokens("bike walk"));
}
