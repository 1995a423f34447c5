// ============================================================================
// HTTP - Timeout de red para gloo-net (AbortController + gloo-timers)
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{AbortController, AbortSignal};

use super::error::ApiError;

/// Aborta la petición si no termina antes del timeout.
/// El temporizador se cancela al soltar el guard.
pub(crate) struct RequestGuard {
    controller: AbortController,
    timed_out: Rc<Cell<bool>>,
    _timer: Timeout,
}

impl RequestGuard {
    pub(crate) fn arm(timeout_millis: u32) -> Result<Self, ApiError> {
        let controller = AbortController::new()
            .map_err(|e| ApiError::Request(format!("AbortController: {:?}", e)))?;
        let timed_out = Rc::new(Cell::new(false));

        let timer = {
            let controller = controller.clone();
            let timed_out = timed_out.clone();
            Timeout::new(timeout_millis, move || {
                log::warn!("⏱️ [HTTP] Timeout de red ({} ms), abortando petición", timeout_millis);
                timed_out.set(true);
                controller.abort();
            })
        };

        Ok(Self {
            controller,
            timed_out,
            _timer: timer,
        })
    }

    pub(crate) fn signal(&self) -> AbortSignal {
        self.controller.signal()
    }

    /// Traduce el error de envío, distinguiendo el abort por timeout
    pub(crate) fn send_error(&self, err: gloo_net::Error) -> ApiError {
        ApiError::Network(err.to_string()).or_timeout(self.timed_out.get())
    }

    /// Igual para la lectura del cuerpo: el abort también corta `.json()`
    pub(crate) fn body_error(&self, err: gloo_net::Error) -> ApiError {
        ApiError::Parse(err.to_string()).or_timeout(self.timed_out.get())
    }
}
