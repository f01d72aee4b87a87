//! Resolve and call a challenge body's `solution`.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use tracing::{debug, instrument, warn};

use crate::args::Arg;
use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::solver::{Challenge, METHOD_NAME, Returns, Solver};
use crate::value::Value;

/// Call `solution` on `challenge` with the sample arguments.
///
/// Returns the value to print. For a void `solution` that is the first
/// argument after the call (or `Null` when there are no arguments).
/// A panic inside `solution` never escapes: it becomes an
/// [`HarnessError::InvocationFailure`].
#[instrument(skip_all, fields(arg_count = args.len()))]
pub fn invoke(
    challenge: &dyn Challenge,
    args: &mut [Arg],
    config: &HarnessConfig,
) -> Result<Value, HarnessError> {
    let Some(solver) = challenge.solution() else {
        warn!(method = METHOD_NAME, "method not found");
        return Err(HarnessError::MethodNotFound {
            name: METHOD_NAME.to_string(),
        });
    };

    let signature = solver.signature();
    signature.check(args)?;
    debug!(params = ?signature.params, returns = ?signature.returns, "signature matched");

    let returned = call_catching_panics(solver, args, config.force_backtrace)?;

    match signature.returns {
        Returns::Void => Ok(args.first().map_or(Value::Null, Arg::to_value)),
        Returns::Value => Ok(returned.unwrap_or(Value::Null)),
    }
}

fn classify(err: anyhow::Error, force_backtrace: bool) -> HarnessError {
    match err.downcast::<HarnessError>() {
        Ok(err) => err,
        Err(err) => {
            let mut trace = format!("{err:?}");
            if force_backtrace && err.backtrace().status() != BacktraceStatus::Captured {
                trace.push_str("\n\nStack backtrace:\n");
                trace.push_str(&Backtrace::force_capture().to_string());
            }
            HarnessError::InvocationFailure {
                message: err.to_string(),
                trace,
            }
        }
    }
}

thread_local! {
    /// `Some(force_backtrace)` while inside [`call_catching_panics`].
    static CAPTURING: Cell<Option<bool>> = const { Cell::new(None) };
    static PANIC_TRACE: RefCell<Option<String>> = const { RefCell::new(None) };
}

static HOOK: Once = Once::new();

/// Install a process-wide panic hook once.
///
/// While the current thread is inside [`call_catching_panics`] the hook
/// records the location and a backtrace instead of printing; otherwise it
/// defers to the previous hook.
fn install_panic_hook() {
    HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let Some(force_backtrace) = CAPTURING.with(Cell::get) else {
                previous(info);
                return;
            };
            let backtrace = if force_backtrace {
                Backtrace::force_capture()
            } else {
                Backtrace::capture()
            };
            let trace = match backtrace.status() {
                BacktraceStatus::Captured => format!("{info}\n{backtrace}"),
                _ => info.to_string(),
            };
            PANIC_TRACE.with(|slot| *slot.borrow_mut() = Some(trace));
        }));
    });
}

fn call_catching_panics(
    solver: &dyn Solver,
    args: &mut [Arg],
    force_backtrace: bool,
) -> Result<Option<Value>, HarnessError> {
    install_panic_hook();
    CAPTURING.with(|flag| flag.set(Some(force_backtrace)));
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| solver.solve(args)));
    CAPTURING.with(|flag| flag.set(None));

    match outcome {
        Ok(result) => result.map_err(|err| classify(err, force_backtrace)),
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|msg| (*msg).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "solution panicked".to_string());
            let trace = PANIC_TRACE
                .with(|slot| slot.borrow_mut().take())
                .unwrap_or_default();
            warn!(%message, "solution panicked");
            Err(HarnessError::InvocationFailure { message, trace })
        }
    }
}
