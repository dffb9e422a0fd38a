use rowmut::prelude::*;

#[derive(Qualified)]
pub struct ByNameValue {
    #[column = "qualifier"]
    qualifier: String,
    #[column("-")]
    _weight: u32,
}

#[derive(Qualified)]
pub struct ByTag {
    #[column("qualifier")]
    column: Option<String>,
}

fn main() {
    let by_name_value = ByNameValue {
        qualifier: "q".to_string(),
        _weight: 1,
    };
    assert_eq!(by_name_value.qualifier(), "q");

    let items = [
        ByTag {
            column: Some("a".to_string()),
        },
        ByTag { column: None },
    ];
    let set = encode_qualifiers("cf", Timestamp::EPOCH, items.as_slice()).unwrap();
    assert_eq!(set.len(), 1);
}
