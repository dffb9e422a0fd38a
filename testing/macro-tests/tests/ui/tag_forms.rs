use rowmut::prelude::*;

// never written, so it needs no FieldValue impl
pub struct Opaque;

#[derive(Columns)]
pub struct TagForms {
    #[column("listed")]
    listed: String,
    #[column = "assigned"]
    assigned: u32,
    #[column("spaced ,  omitempty")]
    spaced: i16,
    #[column("-")]
    skipped: Opaque,
    #[column(", omitempty")]
    fallback: bool,
    untagged: Opaque,
}

fn main() {
    let record = TagForms {
        listed: "a".to_string(),
        assigned: 1,
        spaced: 0,
        skipped: Opaque,
        fallback: false,
        untagged: Opaque,
    };

    let qualifiers: Vec<_> = record.schema().fields().iter().map(|f| f.qualifier()).collect();
    assert_eq!(
        qualifiers,
        ["listed", "assigned", "spaced", "skipped", "fallback", "untagged"]
    );
    assert!(!record.schema().fields()[5].tagged());

    let set = encode_columns("cf", Timestamp::EPOCH, &record).unwrap();
    assert_eq!(set.len(), 2);
}
