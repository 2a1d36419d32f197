//! Interception combinator

use std::rc::Rc;

/// Wrap `original` so `observer` runs after it on every call
///
/// The replacement invokes `original` with the call's arguments, then
/// invokes `observer` with the original's result and the same arguments,
/// and returns the observer's result in place of the original's. Nothing
/// else happens: failures from either side propagate untranslated inside
/// the result types the callables already use.
///
/// The returned slot is itself interceptable, so repeated application
/// layers observers around whatever is currently installed.
///
/// ```
/// use std::rc::Rc;
/// use pilot_bridge::intercept;
///
/// let base: Rc<dyn Fn(u32) -> u32> = Rc::new(|x| x + 1);
/// let logged = intercept(base, |result, x| result * 10 + x);
/// assert_eq!(logged(3), 43);
/// ```
pub fn intercept<Args, Mid, Out>(
    original: Rc<dyn Fn(Args) -> Mid>,
    observer: impl Fn(Mid, &Args) -> Out + 'static,
) -> Rc<dyn Fn(Args) -> Out>
where
    Args: Clone + 'static,
    Mid: 'static,
    Out: 'static,
{
    Rc::new(move |args: Args| observer(original(args.clone()), &args))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_observer_sees_result_and_args() {
        let original: Rc<dyn Fn((u32, u32)) -> u32> = Rc::new(|(a, b)| a + b);
        let wrapped = intercept(original, |sum, &(a, _b)| (sum, a));

        assert_eq!(wrapped((2, 3)), (5, 2));
    }

    #[test]
    fn test_observer_result_replaces_original() {
        let original: Rc<dyn Fn(u32) -> u32> = Rc::new(|x| x * 2);
        let wrapped = intercept(original, |_doubled, _x| 999);

        assert_eq!(wrapped(7), 999);
    }

    #[test]
    fn test_layered_interception_runs_innermost_first() {
        let order = Rc::new(Cell::new(0u32));

        let original: Rc<dyn Fn(u32) -> u32> = Rc::new(|x| x);
        let inner = {
            let order = order.clone();
            intercept(original, move |x, _| {
                order.set(order.get() * 10 + 1);
                x + 100
            })
        };
        let outer = {
            let order = order.clone();
            intercept(inner, move |x, _| {
                order.set(order.get() * 10 + 2);
                x + 1000
            })
        };

        assert_eq!(outer(5), 1105);
        assert_eq!(order.get(), 12);
    }
}
