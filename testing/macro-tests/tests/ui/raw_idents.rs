use rowmut::prelude::*;

#[derive(Columns)]
pub struct Keywords {
    #[column(", omitempty")]
    r#type: String,
    #[column("m")]
    r#match: u8,
    r#loop: u8,
}

fn main() {
    let record = Keywords {
        r#type: "t".to_string(),
        r#match: 1,
        r#loop: 2,
    };

    let set = encode_columns("cf", Timestamp::EPOCH, &record).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.mutations()[0].qualifier_str(), Some("type"));
    assert_eq!(set.mutations()[1].qualifier_str(), Some("m"));
    assert_eq!(record.schema().fields()[2].qualifier(), "loop");
}
