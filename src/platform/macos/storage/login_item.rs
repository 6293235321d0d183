//! Launch-at-login registration through ServiceManagement.
//!
//! macOS 13+ uses `SMAppService.mainAppService`; older systems fall back to
//! `SMLoginItemSetEnabled` with our bundle identifier.

use core_foundation::base::TCFType;
use core_foundation::string::{CFString, CFStringRef};
use objc2::runtime::AnyClass;
use tracing::{debug, warn};

use crate::error::{ButlerError, Result};
use crate::platform::macos::app::bundle_identifier;
use crate::platform::macos::ffi::bridge::{autoreleasepool, id, msg_send, nil, nsstring_to_string};

#[link(name = "ServiceManagement", kind = "framework")]
extern "C" {
    fn SMLoginItemSetEnabled(identifier: CFStringRef, enabled: bool) -> bool;
}

/// `SMAppServiceStatusEnabled`
const SM_STATUS_ENABLED: isize = 1;

fn main_app_service() -> Option<id> {
    let cls = AnyClass::get(c"SMAppService")?;
    let service: id = unsafe { msg_send![cls, mainAppService] };
    (service != nil).then_some(service)
}

/// Register or unregister the app as a login item.
pub fn set_launch_at_login(enabled: bool) -> Result<()> {
    autoreleasepool(|| unsafe {
        let Some(service) = main_app_service() else {
            return legacy_set_enabled(enabled);
        };

        let mut error: id = nil;
        let ok: bool = if enabled {
            msg_send![service, registerAndReturnError: &mut error]
        } else {
            msg_send![service, unregisterAndReturnError: &mut error]
        };
        if ok {
            debug!(enabled, "login item updated");
            return Ok(());
        }

        let description = if error == nil {
            None
        } else {
            let desc: id = msg_send![error, localizedDescription];
            nsstring_to_string(desc)
        };
        Err(ButlerError::LoginItem(
            description.unwrap_or_else(|| "unknown error".to_string()),
        ))
    })
}

/// Whether the system currently has us registered, if it can tell.
pub fn launch_at_login_status() -> Option<bool> {
    autoreleasepool(|| {
        let service = main_app_service()?;
        let status: isize = unsafe { msg_send![service, status] };
        Some(status == SM_STATUS_ENABLED)
    })
}

fn legacy_set_enabled(enabled: bool) -> Result<()> {
    let Some(bundle_id) = bundle_identifier() else {
        warn!("no bundle identifier, skipping login item");
        return Ok(());
    };

    let identifier = CFString::new(&bundle_id);
    if unsafe { SMLoginItemSetEnabled(identifier.as_concrete_TypeRef(), enabled) } {
        Ok(())
    } else {
        Err(ButlerError::LoginItem(format!(
            "SMLoginItemSetEnabled failed for {bundle_id}"
        )))
    }
}
