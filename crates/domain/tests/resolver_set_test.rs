use ferrous_splitdns_domain::ResolverSet;

#[test]
fn test_resolver_set_keeps_order() {
    let set = ResolverSet::new(vec!["223.5.5.5".to_string(), "114.114.114.114".to_string()])
        .unwrap();

    assert_eq!(set.addresses().len(), 2);
    assert_eq!(set.addresses()[0].as_ref(), "223.5.5.5");
    assert_eq!(set.joined(), "223.5.5.5 114.114.114.114");
    assert_eq!(set.to_string(), set.joined());
}

#[test]
fn test_resolver_set_empty_is_invalid() {
    assert!(ResolverSet::new(vec![]).is_err());
}

#[test]
fn test_resolver_set_blank_entry_is_invalid() {
    assert!(ResolverSet::new(vec!["8.8.8.8".to_string(), "  ".to_string()]).is_err());
}

#[test]
fn test_resolver_set_entry_with_inner_space_is_invalid() {
    assert!(ResolverSet::new(vec!["8.8.8.8 1.1.1.1".to_string()]).is_err());
}

#[test]
fn test_resolver_set_entries_are_trimmed() {
    let set = ResolverSet::new(vec![" 8.8.8.8 ".to_string()]).unwrap();
    assert_eq!(set.joined(), "8.8.8.8");
}

#[test]
fn test_or_default_falls_back_on_empty() {
    let set = ResolverSet::or_default(vec![], "114.114.114.114").unwrap();
    assert_eq!(set.joined(), "114.114.114.114");
}

#[test]
fn test_or_default_prefers_given_addresses() {
    let set = ResolverSet::or_default(vec!["1.1.1.1".to_string()], "8.8.8.8").unwrap();
    assert_eq!(set.joined(), "1.1.1.1");
}

#[test]
fn test_category_defaults() {
    assert_eq!(ResolverSet::domestic_default().joined(), "114.114.114.114");
    assert_eq!(ResolverSet::foreign_default().joined(), "8.8.8.8");
}
