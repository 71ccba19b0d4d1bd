//! Built-in default exclude patterns.
//!
//! Every entry is a root-relative recursive pattern. Directory entries end in
//! `/**` so the fast scan can prune the whole subtree instead of rejecting
//! its files one by one.

/// Default exclude patterns, applied when `use_default_excludes` is set.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    // Editor backups and OS metadata
    "**/*~",
    "**/#*#",
    "**/.#*",
    "**/%*%",
    "**/._*",
    "**/.DS_Store",
    "**/Thumbs.db",
    // Version control
    "**/.git/**",
    "**/.gitignore",
    "**/.gitattributes",
    "**/.gitmodules",
    "**/.hg/**",
    "**/.hgignore",
    "**/.svn/**",
    "**/.bzr/**",
    "**/CVS/**",
    "**/.cvsignore",
    "**/RCS/**",
    "**/SCCS/**",
    "**/_darcs/**",
    "**/.jj/**",
    // Build output
    "**/target/**",
    "**/build/**",
    "**/out/**",
    "**/dist/**",
    "**/.gradle/**",
    "**/.mvn/**",
    "**/node_modules/**",
    "**/bower_components/**",
    "**/__pycache__/**",
    "**/.repository/**",
    // IDE/Editor
    "**/.idea/**",
    "**/*.iml",
    "**/*.ipr",
    "**/*.iws",
    "**/.vscode/**",
    "**/.settings/**",
    "**/.project",
    "**/.classpath",
    "**/nbproject/**",
    // Compiled
    "**/*.class",
    "**/*.o",
    "**/*.obj",
    "**/*.so",
    "**/*.dll",
    "**/*.dylib",
    "**/*.exe",
    "**/*.pyc",
    // Archives
    "**/*.jar",
    "**/*.war",
    "**/*.ear",
    "**/*.zip",
    "**/*.tar",
    "**/*.gz",
    "**/*.tgz",
    "**/*.bz2",
    "**/*.xz",
    "**/*.7z",
    "**/*.rar",
    // Images
    "**/*.png",
    "**/*.jpg",
    "**/*.jpeg",
    "**/*.gif",
    "**/*.bmp",
    "**/*.ico",
    "**/*.tif",
    "**/*.tiff",
    "**/*.webp",
    "**/*.psd",
    // Fonts
    "**/*.ttf",
    "**/*.otf",
    "**/*.eot",
    "**/*.woff",
    "**/*.woff2",
    // Media & documents
    "**/*.mp3",
    "**/*.mp4",
    "**/*.wav",
    "**/*.avi",
    "**/*.mov",
    "**/*.pdf",
    "**/*.doc",
    "**/*.docx",
    "**/*.xls",
    "**/*.xlsx",
    "**/*.ppt",
    "**/*.pptx",
    // Keys and certificates
    "**/*.jks",
    "**/*.keystore",
    "**/*.p12",
    "**/*.der",
    // Logs and licenses that carry their own text
    "**/*.log",
    "**/LICENSE",
    "**/LICENSE.txt",
    "**/NOTICE",
];

/// Owned copy of [`DEFAULT_EXCLUDES`], the value injected into selectors.
pub fn default_excludes() -> Vec<String> {
    DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect()
}
