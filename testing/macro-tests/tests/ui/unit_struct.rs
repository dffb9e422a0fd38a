use rowmut::{error::InvalidInput, prelude::*};

#[derive(Columns)]
pub struct Marker;

fn main() {
    let err = encode_columns("cf", Timestamp::EPOCH, &Marker).unwrap_err();
    assert_eq!(
        err,
        EncodeError::InvalidInput(InvalidInput::NoFields {
            record: "Marker".to_string(),
        })
    );
}
