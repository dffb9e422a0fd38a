use std::{borrow::Cow, rc::Rc, sync::Arc};

///
/// Qualified
///
/// An item whose only payload is a column name. The qualifier-list encoder
/// stamps one empty cell per item; an empty qualifier means "no column".
///
/// Object safe, so heterogeneous lists can be passed as `&[&dyn Qualified]`.
///

pub trait Qualified {
    fn qualifier(&self) -> &str;
}

impl Qualified for str {
    fn qualifier(&self) -> &str {
        self
    }
}

impl Qualified for String {
    fn qualifier(&self) -> &str {
        self
    }
}

impl Qualified for Cow<'_, str> {
    fn qualifier(&self) -> &str {
        self
    }
}

impl<T: Qualified> Qualified for Option<T> {
    fn qualifier(&self) -> &str {
        self.as_ref().map_or("", Qualified::qualifier)
    }
}

impl<T: Qualified + ?Sized> Qualified for &T {
    fn qualifier(&self) -> &str {
        (**self).qualifier()
    }
}

impl<T: Qualified + ?Sized> Qualified for Box<T> {
    fn qualifier(&self) -> &str {
        (**self).qualifier()
    }
}

impl<T: Qualified + ?Sized> Qualified for Rc<T> {
    fn qualifier(&self) -> &str {
        (**self).qualifier()
    }
}

impl<T: Qualified + ?Sized> Qualified for Arc<T> {
    fn qualifier(&self) -> &str {
        (**self).qualifier()
    }
}
