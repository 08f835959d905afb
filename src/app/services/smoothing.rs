use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::platform::{
    FE_FONTSMOOTHINGCLEARTYPE, FE_FONTSMOOTHINGSTANDARD, SmoothingApi, SpiAction, platform_smoothing,
};

/// An open smoothing control; closed when dropped, on every path.
struct ControlHandle<'a> {
    api: &'a mut dyn SmoothingApi,
}

impl<'a> ControlHandle<'a> {
    fn acquire(api: &'a mut dyn SmoothingApi) -> Result<Self> {
        api.open()?;
        Ok(Self { api })
    }

    fn get(&mut self, action: SpiAction) -> Result<u32> {
        self.api.get(action)
    }

    fn set(&mut self, action: SpiAction, value: u32) -> Result<()> {
        self.api.set(action, value)
    }
}

impl Drop for ControlHandle<'_> {
    fn drop(&mut self) {
        self.api.close();
    }
}

/// ClearType on/off for platforms that expose a smoothing control.
pub struct FontSmoothing {
    api: Box<dyn SmoothingApi>,
}

impl FontSmoothing {
    pub fn new(api: Box<dyn SmoothingApi>) -> Self {
        Self { api }
    }

    /// The running platform's control, `None` where there is none.
    pub fn for_platform() -> Option<Self> {
        platform_smoothing().map(Self::new)
    }

    pub fn is_enabled(&mut self) -> Result<bool> {
        let mut handle = ControlHandle::acquire(self.api.as_mut())?;
        let kind = handle.get(SpiAction::GetFontSmoothingType)?;
        Ok(kind == FE_FONTSMOOTHINGCLEARTYPE)
    }

    /// Turn smoothing on if needed, then switch it to ClearType.
    pub fn enable(&mut self) -> Result<()> {
        let mut handle = ControlHandle::acquire(self.api.as_mut())?;
        if handle.get(SpiAction::GetFontSmoothing)? == 0 {
            handle.set(SpiAction::SetFontSmoothing, 1)?;
        }
        handle.set(SpiAction::SetFontSmoothingType, FE_FONTSMOOTHINGCLEARTYPE)
    }

    pub fn disable(&mut self) -> Result<()> {
        let mut handle = ControlHandle::acquire(self.api.as_mut())?;
        handle.set(SpiAction::SetFontSmoothingType, FE_FONTSMOOTHINGSTANDARD)
    }

    /// Flip ClearType and return the new state.
    pub fn toggle(&mut self) -> Result<bool> {
        if self.is_enabled()? {
            self.disable()?;
            Ok(false)
        } else {
            self.enable()?;
            Ok(true)
        }
    }
}
