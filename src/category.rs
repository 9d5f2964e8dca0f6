//! Keyword-based formula categories.
//!
//! Each formula lands in exactly one [`Category`]. Rules are tried in a fixed
//! order and the first hit wins:
//!
//! 1. Names starting with `lib` or `glib` are [`Category::Libraries`].
//! 2. Otherwise the keyword categories are scanned in declaration order, and
//!    within each category its keywords in order. A keyword matches if it is
//!    a substring of the lowercased name or description.
//! 3. Anything left over is [`Category::Other`].
//!
//! Keywords are deliberately loose substrings (`go` matches `cargo`), so
//! reordering the table changes results.

use std::fmt;

/// A report section for formulae
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    LanguagesRuntimes,
    BuildTools,
    MediaGraphics,
    NetworkSecurity,
    Databases,
    DevTools,
    PackageManagers,
    Virtualization,
    AiMl,
    Libraries,
    Other,
}

/// Keyword rules in match order
const KEYWORD_RULES: &[(Category, &[&str])] = &[
    (
        Category::LanguagesRuntimes,
        &[
            "go", "python", "node", "ruby", "rust", "java", "openjdk", "perl", "lua", "erlang",
            "elixir", "scala", "kotlin", "swift", "clang", "llvm", "gcc",
        ],
    ),
    (
        Category::BuildTools,
        &[
            "cmake",
            "make",
            "autoconf",
            "automake",
            "pkg-config",
            "libtool",
            "meson",
            "ninja",
            "gradle",
            "maven",
            "bazel",
            "scons",
            "bison",
            "flex",
            "m4",
        ],
    ),
    (
        Category::MediaGraphics,
        &[
            "ffmpeg",
            "imagemagick",
            "jpeg",
            "png",
            "gif",
            "webp",
            "heif",
            "av1",
            "x264",
            "x265",
            "opus",
            "lame",
            "vorbis",
            "theora",
            "cairo",
            "pango",
            "harfbuzz",
            "freetype",
            "fontconfig",
        ],
    ),
    (
        Category::NetworkSecurity,
        &[
            "openssl",
            "curl",
            "wget",
            "gnupg",
            "gpg",
            "ssh",
            "ssl",
            "tls",
            "libssh",
            "nmap",
            "netcat",
            "socat",
            "mtr",
            "tcpdump",
            "wireshark",
        ],
    ),
    (
        Category::Databases,
        &[
            "sqlite",
            "postgresql",
            "mysql",
            "redis",
            "mongodb",
            "mariadb",
            "leveldb",
            "rocksdb",
            "lmdb",
        ],
    ),
    (
        Category::DevTools,
        &[
            "git", "vim", "neovim", "helix", "tmux", "fzf", "ripgrep", "rg", "fd", "bat", "exa",
            "eza", "jq", "yq", "gh", "hub", "tree", "htop", "watch", "entr", "zoxide", "starship",
            "direnv",
        ],
    ),
    (
        Category::PackageManagers,
        &[
            "pipx",
            "uv",
            "yarn",
            "npm",
            "pnpm",
            "cargo",
            "gem",
            "cocoapods",
            "buf",
        ],
    ),
    (
        Category::Virtualization,
        &[
            "qemu",
            "docker",
            "podman",
            "lima",
            "colima",
            "hyperkit",
            "virtualbox",
        ],
    ),
    (Category::AiMl, &["huggingface-cli", "gemini-cli", "ollama"]),
];

impl Category {
    /// Every category, keyword categories first in match order
    pub const ALL: [Category; 11] = [
        Category::LanguagesRuntimes,
        Category::BuildTools,
        Category::MediaGraphics,
        Category::NetworkSecurity,
        Category::Databases,
        Category::DevTools,
        Category::PackageManagers,
        Category::Virtualization,
        Category::AiMl,
        Category::Libraries,
        Category::Other,
    ];

    /// Section heading used in the report
    pub fn name(self) -> &'static str {
        match self {
            Category::LanguagesRuntimes => "Languages & Runtimes",
            Category::BuildTools => "Build Tools",
            Category::MediaGraphics => "Media & Graphics",
            Category::NetworkSecurity => "Network & Security",
            Category::Databases => "Databases",
            Category::DevTools => "Dev Tools",
            Category::PackageManagers => "Package Managers",
            Category::Virtualization => "Virtualization & Containers",
            Category::AiMl => "AI & ML Tools",
            Category::Libraries => "Libraries",
            Category::Other => "Other Tools & Utilities",
        }
    }

    /// Keywords for this category (empty for `Libraries` and `Other`)
    pub fn keywords(self) -> &'static [&'static str] {
        KEYWORD_RULES
            .iter()
            .find(|(category, _)| *category == self)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pick the category for a formula from its name and description
pub fn categorize(name: &str, desc: &str) -> Category {
    let name_lower = name.to_lowercase();
    let desc_lower = desc.to_lowercase();

    if name_lower.starts_with("lib") || name_lower.starts_with("glib") {
        tracing::trace!("{} -> Libraries (name prefix)", name);
        return Category::Libraries;
    }

    for (category, keywords) in KEYWORD_RULES {
        if let Some(keyword) = keywords
            .iter()
            .find(|kw| name_lower.contains(*kw) || desc_lower.contains(*kw))
        {
            tracing::trace!("{} -> {} (keyword '{}')", name, category, keyword);
            return *category;
        }
    }

    Category::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lib_prefix_wins_over_keywords() {
        assert_eq!(categorize("libpng", "PNG image library"), Category::Libraries);
        assert_eq!(categorize("libssh2", "C library for SSH2"), Category::Libraries);
        assert_eq!(categorize("LibYAML", "YAML parser"), Category::Libraries);
        assert_eq!(
            categorize("glib", "Core application library for C"),
            Category::Libraries
        );
        assert_eq!(categorize("glibmm", "C++ interface to glib"), Category::Libraries);
    }

    #[test]
    fn test_keyword_in_name() {
        assert_eq!(categorize("ffmpeg", ""), Category::MediaGraphics);
        assert_eq!(categorize("sqlite", ""), Category::Databases);
        assert_eq!(categorize("qemu", ""), Category::Virtualization);
        assert_eq!(categorize("ollama", ""), Category::AiMl);
    }

    #[test]
    fn test_keyword_in_description() {
        assert_eq!(
            categorize("ffmpeg", "Play, record, convert, and stream audio and video"),
            Category::MediaGraphics
        );
        assert_eq!(
            categorize("htop", "Improved top (interactive process viewer)"),
            Category::DevTools
        );
        // "gh" hides inside "high"
        assert_eq!(
            categorize("xz", "General-purpose data compression with high ratio"),
            Category::DevTools
        );
    }

    #[test]
    fn test_earlier_category_wins() {
        // "go" (Languages) is checked before "cargo" (Package Managers)
        assert_eq!(categorize("cargo-edit", ""), Category::LanguagesRuntimes);
        // "make" (Build Tools) is checked before "git" (Dev Tools)
        assert_eq!(categorize("git-make", ""), Category::BuildTools);
        // Description keyword from an earlier category beats a name keyword from a later one
        assert_eq!(
            categorize("jq", "Lightweight JSON processor written in node"),
            Category::LanguagesRuntimes
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(categorize("FFMPEG", ""), Category::MediaGraphics);
        assert_eq!(categorize("tool", "Talks to REDIS"), Category::Databases);
    }

    #[test]
    fn test_no_match_is_other() {
        assert_eq!(categorize("xz", ""), Category::Other);
        assert_eq!(categorize("", ""), Category::Other);
    }

    #[test]
    fn test_names_and_keywords() {
        assert_eq!(Category::Other.to_string(), "Other Tools & Utilities");
        assert_eq!(Category::AiMl.name(), "AI & ML Tools");
        assert!(Category::Libraries.keywords().is_empty());
        assert!(Category::Other.keywords().is_empty());
        assert_eq!(Category::BuildTools.keywords().first(), Some(&"cmake"));
    }

    #[test]
    fn test_every_keyword_category_listed_once() {
        for (category, _) in KEYWORD_RULES {
            assert_eq!(Category::ALL.iter().filter(|c| *c == category).count(), 1);
        }
        assert_eq!(KEYWORD_RULES.len(), Category::ALL.len() - 2);
    }
}
