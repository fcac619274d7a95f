macro_rules! hidden_item {
    ( $( $item:item )* ) => {
        $(
            #[doc(hidden)]
            $item
        )*
    };
}

/// Assert that a condition holds, failing the enclosing test if it does not.
///
/// When the condition is false the message is logged once at error level and
/// the enclosing test function returns immediately with a failed
/// [`Outcome`](crate::Outcome), skipping everything after the assertion. A
/// true condition has no side effect. The form without a message reports the
/// stringified condition.
#[macro_export]
macro_rules! check {
    ( $cond:expr ) => {
        $crate::check!($cond, concat!("assertion failed: ", stringify!($cond)));
    };
    ( $cond:expr, $($arg:tt)+ ) => {{
        use $crate::_macro_reexports as __mu;
        if !($cond) {
            let message = __mu::format!($($arg)+);
            __mu::log::error!("{}", message);
            return $crate::Outcome::failed().error_message(message);
        }
    }};
}

/// Mark the current test as failed and then terminate its execution.
#[macro_export]
macro_rules! fail {
    () => {
        $crate::fail!("explicitly failed");
    };
    ( $($arg:tt)+ ) => {{
        use $crate::_macro_reexports as __mu;
        let message = __mu::format!($($arg)+);
        __mu::log::error!("{}", message);
        return $crate::Outcome::failed().error_message(message);
    }};
}

/// Build the array of test cases making up a suite, in declaration order.
///
/// Each entry records the function path as the test name together with the
/// location of the `suite!` invocation.
#[macro_export]
macro_rules! suite {
    ( $( $test:path ),* $(,)? ) => {
        [
            $(
                {
                    use $crate::_macro_reexports as __mu;
                    __mu::TestCase {
                        desc: __mu::TestDesc {
                            name: __mu::stringify!($test),
                            location: __mu::Location {
                                file: __mu::file!(),
                                line: __mu::line!(),
                                column: __mu::column!(),
                            },
                        },
                        test_fn: $test,
                    }
                }
            ),*
        ]
    };
}

/// Generate the main function for a test binary running the given tests.
#[macro_export]
macro_rules! test_main {
    ( $( $test:path ),* $(,)? ) => {
        fn main() {
            $crate::run_tests(&$crate::suite![ $( $test ),* ]);
        }
    };
}
