#[macro_export]
macro_rules! column_kind_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (Bytes, "bytes", width = None),
            (Text, "text", width = None),
            (Bool, "bool", width = Some(1)),
            (Int8, "int8", width = Some(1)),
            (Int16, "int16", width = Some(2)),
            (Int32, "int32", width = Some(4)),
            (Int64, "int64", width = Some(8)),
            (Uint8, "uint8", width = Some(1)),
            (Uint16, "uint16", width = Some(2)),
            (Uint32, "uint32", width = Some(4)),
            (Uint64, "uint64", width = Some(8)),
            (Float32, "float32", width = Some(4)),
            (Float64, "float64", width = Some(8)),
        }
    };
}

#[macro_export]
macro_rules! column_kind_registry {
    ($macro:ident) => {
        $crate::column_kind_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::column_kind_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! metadata_from_registry {
    ( @args $kind:expr; @entries $( ($column:ident, $label:literal, width = $width:expr) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::ColumnKind::$column => $crate::ColumnMetadata {
                    label: $label,
                    width: $width,
                },
            )*
        }
    };
}

macro_rules! all_kinds_from_registry {
    ( @entries $( ($column:ident, $label:literal, width = $width:expr) ),* $(,)? ) => {
        [ $( $crate::ColumnKind::$column ),* ]
    };
}
