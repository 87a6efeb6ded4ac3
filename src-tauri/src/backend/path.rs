// ABOUTME: Resolves where the bundled wallet daemon lives for each platform's packaging layout.
// ABOUTME: Paths are computed lexically from the shell executable path; nothing is checked on disk.

use std::path::{Path, PathBuf};

use crate::platform::Platform;

/// Path of the backend executable for `platform`, given the shell's own executable path.
///
/// - macOS: `<exe>/../../Resources/app/<name>` inside the app bundle.
/// - Windows: `./resources/app/<name>.exe`, relative to keep under path length limits.
/// - Linux: `<exe-dir>/resources/app/<name>`.
/// - anything else: `./resources/app/<name>`.
pub fn backend_executable(platform: Platform, exe_path: &Path, name: &str) -> PathBuf {
    match platform {
        Platform::MacOs => {
            // Contents/MacOS/<exe> -> Contents
            let contents = exe_path.ancestors().nth(2).unwrap_or(Path::new(""));
            contents.join("Resources").join("app").join(name)
        }
        Platform::Windows => PathBuf::from(format!("./resources/app/{}.exe", name)),
        Platform::Linux => {
            let exe_dir = exe_path.parent().unwrap_or(Path::new(""));
            exe_dir.join("resources").join("app").join(name)
        }
        Platform::Other => PathBuf::from(format!("./resources/app/{}", name)),
    }
}

/// Directory containing `executable`, or `.` for a bare file name.
pub fn executable_dir(executable: &Path) -> &Path {
    executable
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macos_resolves_into_bundle_resources() {
        let exe = Path::new("/Applications/Unicoin.app/Contents/MacOS/Unicoin");
        assert_eq!(
            backend_executable(Platform::MacOs, exe, "unicoin"),
            PathBuf::from("/Applications/Unicoin.app/Contents/Resources/app/unicoin")
        );
    }

    #[test]
    fn windows_uses_short_relative_path() {
        let exe = Path::new(r"C:\Program Files\Unicoin\Unicoin.exe");
        assert_eq!(
            backend_executable(Platform::Windows, exe, "unicoin"),
            PathBuf::from("./resources/app/unicoin.exe")
        );
    }

    #[test]
    fn linux_resolves_next_to_executable() {
        let exe = Path::new("/opt/Unicoin/unicoin-desktop");
        assert_eq!(
            backend_executable(Platform::Linux, exe, "unicoin"),
            PathBuf::from("/opt/Unicoin/resources/app/unicoin")
        );
    }

    #[test]
    fn other_platforms_fall_back_to_relative_path() {
        let exe = Path::new("/usr/local/bin/unicoin-desktop");
        assert_eq!(
            backend_executable(Platform::Other, exe, "unicoin"),
            PathBuf::from("./resources/app/unicoin")
        );
    }

    #[test]
    fn executable_dir_of_relative_path() {
        assert_eq!(
            executable_dir(Path::new("./resources/app/unicoin.exe")),
            Path::new("./resources/app")
        );
        assert_eq!(executable_dir(Path::new("unicoin")), Path::new("."));
    }
}
