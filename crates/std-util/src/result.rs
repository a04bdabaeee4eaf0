/// Unwraps an `Err`, panicking with the `Ok` value otherwise. Extra
/// arguments are formatted into the panic message.
#[macro_export]
macro_rules! assert_err {
    ($e:expr $(,)?) => {
        match $e {
            Err(err) => err,
            Ok(value) => panic!("expected `Err`; got Ok({:?})", value),
        }
    };
    ($e:expr, $($msg:tt)+) => {
        match $e {
            Err(err) => err,
            Ok(value) => panic!("expected `Err`; got Ok({:?}); {}", value, format_args!($($msg)+)),
        }
    };
}

/// Unwraps an `Ok`, panicking with the error otherwise.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr $(,)?) => {
        match $e {
            Ok(value) => value,
            Err(err) => panic!("expected `Ok`; got Err({:?})", err),
        }
    };
}
