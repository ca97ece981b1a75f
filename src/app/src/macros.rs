/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.error_message, None)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.assistant_pending, false;
///     model.error_message, None
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

/// Macro for device GET requests whose answer only needs a status check.
/// The checked result is mapped into the given response event.
///
/// # Examples
///
/// ```ignore
/// device_command!(url, "/on", |result| Event::Connection(ConnectionEvent::PowerResponse(result)))
/// ```
#[macro_export]
macro_rules! device_command {
    ($url:expr, $path:expr, |$result:ident| $event:expr) => {{
        let path: String = $path.to_string();
        $crate::DeviceCmd::get($url).build().then_send(move |response| {
            let $result = $crate::http_helpers::check_command_response(&path, response)
                .map(|_| ())
                .map_err(|e| e.to_string());
            $event
        })
    }};
}
