use rowmut::prelude::*;
use std::borrow::Cow;

#[derive(Columns)]
pub struct Wrapper<'a, T: FieldValue> {
    #[column("inner")]
    inner: T,
    #[column("label, omitempty")]
    label: Cow<'a, str>,
}

#[derive(Qualified)]
pub struct Named<Q: Qualified> {
    #[column("qualifier")]
    qualifier: Q,
}

fn main() {
    let record = Wrapper {
        inner: 7u64,
        label: Cow::Borrowed(""),
    };
    let set = encode_columns("cf", Timestamp::EPOCH, &record).unwrap();
    assert_eq!(set.len(), 1);

    let items = [Named { qualifier: "x" }, Named { qualifier: "y" }];
    let set = encode_qualifiers("cf", Timestamp::EPOCH, items.as_slice()).unwrap();
    assert_eq!(set.len(), 2);
}
