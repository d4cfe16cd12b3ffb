use search_params::SearchParams;

#[test]
fn repeated_keys_are_preserved_in_order() {
    let params = SearchParams::from_query("sp=dog&q=rex&sp=cat&sp=dog");
    assert_eq!(params.get_all("sp"), ["dog", "cat", "dog"].map(String::from));
    assert_eq!(params.get_first("q"), Some("rex"));
    assert_eq!(params.len(), 2);
}

#[test]
fn leading_question_mark_and_empty_input() {
    assert_eq!(
        SearchParams::from_query("?page=2"),
        SearchParams::from_pairs([("page", "2")])
    );
    assert!(SearchParams::from_query("").is_empty());
    assert!(SearchParams::from_query("?").is_empty());
}

#[test]
fn percent_and_plus_decoding() {
    let params = SearchParams::from_query("q=Caf%C3%A9+au+lait&x=a%26b%3Dc");
    assert_eq!(params.get_first("q"), Some("Café au lait"));
    assert_eq!(params.get_first("x"), Some("a&b=c"));
}

#[test]
fn keys_without_value_and_empty_keys() {
    let params = SearchParams::from_query("flag&=orphan&q=");
    assert_eq!(params.get_first("flag"), Some(""));
    assert_eq!(params.get_first("q"), Some(""));
    assert!(!params.contains_key(""));
}

#[test]
fn to_query_uses_repeated_keys_sorted_by_key() {
    let params = SearchParams::from_pairs([("sp", "dog"), ("page", "3"), ("sp", "cat")]);
    assert_eq!(params.to_query(), "page=3&sp=dog&sp=cat");
    assert_eq!(SearchParams::new().to_query(), "");
}

#[test]
fn to_query_escapes_reserved_characters() {
    let params = SearchParams::from_pairs([("q", "a&b c")]);
    let query = params.to_query();
    assert_eq!(query, "q=a%26b+c");
    assert_eq!(SearchParams::from_query(&query), params);
}

#[test]
fn set_all_with_no_values_removes_the_key() {
    let mut params = SearchParams::from_pairs([("st", "open"), ("page", "1")]);
    params.set_all("st", Vec::new());
    assert!(!params.contains_key("st"));

    params.set_all("st", vec!["adopted".to_string()]);
    assert_eq!(params.get_all("st"), ["adopted".to_string()]);

    assert_eq!(params.remove("page"), Some(vec!["1".to_string()]));
    assert!(params.get_all("page").is_empty());
}

#[test]
fn retain_keys_filters_in_place() {
    let mut params = SearchParams::from_query("a=1&b=2&c=3");
    params.retain_keys(|k| k != "b");
    let keys: Vec<&str> = params.keys().collect();
    assert_eq!(keys, vec!["a", "c"]);
}

#[test]
fn serializes_as_plain_json_object() {
    let params = SearchParams::from_pairs([("sp", "dog"), ("sp", "cat")]);
    let json = serde_json::to_value(&params).expect("serialize");
    assert_eq!(json, serde_json::json!({ "sp": ["dog", "cat"] }));
}
