use super::error::Result;

pub const FE_FONTSMOOTHINGSTANDARD: u32 = 0x0001;
pub const FE_FONTSMOOTHINGCLEARTYPE: u32 = 0x0002;

/// The `SystemParametersInfo` actions the smoothing toggle needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiAction {
    GetFontSmoothing,
    SetFontSmoothing,
    GetFontSmoothingType,
    SetFontSmoothingType,
}

impl SpiAction {
    pub fn code(self) -> u32 {
        match self {
            SpiAction::GetFontSmoothing => 0x004A,
            SpiAction::SetFontSmoothing => 0x004B,
            SpiAction::GetFontSmoothingType => 0x200A,
            SpiAction::SetFontSmoothingType => 0x200B,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SpiAction::GetFontSmoothing => "GETFONTSMOOTHING",
            SpiAction::SetFontSmoothing => "SETFONTSMOOTHING",
            SpiAction::GetFontSmoothingType => "GETFONTSMOOTHINGTYPE",
            SpiAction::SetFontSmoothingType => "SETFONTSMOOTHINGTYPE",
        }
    }
}

/// Low-level access to the OS font-smoothing control.
///
/// Every `get`/`set` must happen between `open` and `close`.
pub trait SmoothingApi {
    fn open(&mut self) -> Result<()>;

    fn close(&mut self);

    /// Query `action` and return the value it reports.
    fn get(&mut self, action: SpiAction) -> Result<u32>;

    /// Apply `value` for `action` and broadcast the change.
    fn set(&mut self, action: SpiAction, value: u32) -> Result<()>;
}

/// The smoothing control of the running platform, if it has one.
pub fn platform_smoothing() -> Option<Box<dyn SmoothingApi>> {
    #[cfg(target_os = "windows")]
    {
        Some(Box::new(windows_spi::WindowsSmoothing::default()))
    }

    #[cfg(not(target_os = "windows"))]
    {
        None
    }
}

#[cfg(target_os = "windows")]
mod windows_spi {
    use std::ffi::c_void;

    use windows::Win32::UI::WindowsAndMessaging::{
        SPIF_SENDCHANGE, SPIF_UPDATEINIFILE, SYSTEM_PARAMETERS_INFO_ACTION,
        SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS, SystemParametersInfoW,
    };

    use super::{SmoothingApi, SpiAction};
    use crate::app::infrastructure::error::{AppError, Result};

    /// `SystemParametersInfoW` from user32.
    #[derive(Debug, Default)]
    pub struct WindowsSmoothing {
        open: bool,
    }

    impl WindowsSmoothing {
        fn ensure_open(&self, action: SpiAction) -> Result<()> {
            if self.open {
                Ok(())
            } else {
                Err(AppError::PlatformControl {
                    call: action.name(),
                    code: 0,
                })
            }
        }
    }

    fn control_error(action: SpiAction, e: windows::core::Error) -> AppError {
        AppError::PlatformControl {
            call: action.name(),
            code: e.code().0 as u32,
        }
    }

    impl SmoothingApi for WindowsSmoothing {
        fn open(&mut self) -> Result<()> {
            self.open = true;
            Ok(())
        }

        fn close(&mut self) {
            self.open = false;
        }

        fn get(&mut self, action: SpiAction) -> Result<u32> {
            self.ensure_open(action)?;
            let mut value: u32 = 0;
            unsafe {
                SystemParametersInfoW(
                    SYSTEM_PARAMETERS_INFO_ACTION(action.code()),
                    0,
                    Some((&mut value as *mut u32).cast::<c_void>()),
                    SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS(0),
                )
            }
            .map_err(|e| control_error(action, e))?;
            Ok(value)
        }

        fn set(&mut self, action: SpiAction, value: u32) -> Result<()> {
            self.ensure_open(action)?;
            let flags = SPIF_UPDATEINIFILE | SPIF_SENDCHANGE;
            // SETFONTSMOOTHING takes its value in uiParam, SETFONTSMOOTHINGTYPE in pvParam.
            let (ui_param, pv_param) = match action {
                SpiAction::SetFontSmoothing => (value, None),
                _ => (0, Some(value as usize as *mut c_void)),
            };
            unsafe {
                SystemParametersInfoW(
                    SYSTEM_PARAMETERS_INFO_ACTION(action.code()),
                    ui_param,
                    pv_param,
                    flags,
                )
            }
            .map_err(|e| control_error(action, e))
        }
    }
}
