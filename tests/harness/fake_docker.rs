use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Shell stand-ins for `docker` and `docker-compose` that log every call.
///
/// State lives in plain files under `state_dir`: `networks` and `images` hold
/// one name per line; `no-compose` and `pull-fails` switch failure modes.
pub struct FakeDocker {
    pub bin_dir: PathBuf,
    pub state_dir: PathBuf,
    pub log_file: PathBuf,
}

impl FakeDocker {
    pub fn install(root: &Path) -> Self {
        let bin_dir = root.join("bin");
        let state_dir = root.join("docker-state");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        fs::create_dir_all(&state_dir).expect("Failed to create docker state dir");
        let log_file = state_dir.join("docker.log");
        let state = state_dir.to_string_lossy();

        let docker = format!(
            r#"#!/bin/sh
echo "$@" >> "{log}"

case "$1" in
    compose)
        [ -f "{state}/no-compose" ] && exit 1
        echo "Docker Compose version v2.29.0"
        ;;
    network)
        if [ "$2" = "ls" ]; then
            [ -f "{state}/networks" ] && cat "{state}/networks"
        elif [ "$2" = "create" ]; then
            echo "$3" >> "{state}/networks"
        fi
        ;;
    image)
        grep -qxF "$3" "{state}/images" 2>/dev/null || exit 1
        ;;
    pull)
        if [ -f "{state}/pull-fails" ]; then
            echo "pull access denied for $2" >&2
            exit 1
        fi
        echo "$2" >> "{state}/images"
        ;;
esac

exit 0
"#,
            log = log_file.to_string_lossy(),
            state = state,
        );
        let compose = format!(
            "#!/bin/sh\n[ -f \"{state}/no-compose\" ] && exit 1\necho \"docker-compose version 1.29.2\"\n",
            state = state,
        );

        write_script(&bin_dir.join("docker"), &docker);
        write_script(&bin_dir.join("docker-compose"), &compose);

        Self { bin_dir, state_dir, log_file }
    }

    pub fn disable_compose(&self) {
        fs::write(self.state_dir.join("no-compose"), "").expect("Failed to write flag");
    }

    pub fn fail_pulls(&self) {
        fs::write(self.state_dir.join("pull-fails"), "").expect("Failed to write flag");
    }

    pub fn add_network(&self, name: &str) {
        let path = self.state_dir.join("networks");
        let mut content = fs::read_to_string(&path).unwrap_or_default();
        content.push_str(name);
        content.push('\n');
        fs::write(path, content).expect("Failed to write networks");
    }

    pub fn networks(&self) -> Vec<String> {
        fs::read_to_string(self.state_dir.join("networks"))
            .unwrap_or_default()
            .lines()
            .map(String::from)
            .collect()
    }

    /// Every invocation's arguments, one per line.
    pub fn log(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }

    /// `PATH` value that resolves `docker` to this fake first.
    pub fn path_env(&self) -> String {
        format!("{}:/usr/bin:/bin", self.bin_dir.display())
    }
}

fn write_script(path: &Path, content: &str) {
    fs::write(path, content).expect("Failed to write fake script");
    let mut perms = fs::metadata(path).expect("Failed to get metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to set permissions");
}
