use gshop_derive::shop_error;
use gshop_domain::ErrorKind;

mod inner {
    use gshop_derive::shop_error;
    use std::borrow::Cow;

    #[shop_error]
    pub enum InnerError {
        #[kind(NotFound)]
        #[error("Missing{}: {message}", format_context(.context))]
        Missing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

        #[kind(Authorization)]
        #[error("Denied{}", format_context(.context))]
        Denied { context: Option<Cow<'static, str>> },
    }
}

mod outer {
    use super::inner::InnerError;
    use gshop_derive::shop_error;
    use std::borrow::Cow;

    #[shop_error]
    pub enum OuterError {
        #[kind(source)]
        #[error("Inner failure{}: {source}", format_context(.context))]
        Inner { source: InnerError, context: Option<Cow<'static, str>> },

        #[kind(Internal)]
        #[error("Internal error{}: {message}", format_context(.context))]
        Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    }
}

use inner::InnerError;
use outer::OuterError;

fn main() {
    let missing = InnerError::Missing { message: "account 7".into(), context: None };
    assert_eq!(missing.kind(), ErrorKind::NotFound);

    let wrapped: OuterError = InnerError::Denied { context: None }.into();
    assert_eq!(wrapped.kind(), ErrorKind::Authorization);

    let internal: OuterError = String::from("hash failed").into();
    assert_eq!(internal.kind(), ErrorKind::Internal);
}
