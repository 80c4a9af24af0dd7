/// Evaluates to `Err($y)` when the condition `$x` does not hold, `Ok(())` otherwise.
#[macro_export]
macro_rules! ensure {
    ( $x:expr, $y:expr ) => {{
        if !$x {
            Err($y)
        } else {
            Ok(())
        }
    }};
}
