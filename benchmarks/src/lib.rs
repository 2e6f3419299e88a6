use regex::Regex;
use semantic_version::SemanticVersion;
use semver::Version;

const INPUT_S: &str = "1.0.0";
const INPUT_XL: &str = "1.2.3-1.alpha1.9+build5.7.3aedf.01337";
pub const INPUTS: [&str; 2] = [INPUT_S, INPUT_XL];

#[inline(always)]
pub fn strict(input: &str) -> SemanticVersion {
    semantic_version::must_parse(input)
}

#[inline(always)]
pub fn lenient(input: &str) -> SemanticVersion {
    semantic_version::parse_lenient(input).unwrap()
}

#[inline(always)]
pub fn strict_semver(input: &str) -> Version {
    semantic_version::parse_into::<Version>(input).unwrap()
}

#[inline(always)]
pub fn validate(input: &str) -> bool {
    semantic_version::is_valid(input, semantic_version::Mode::Strict)
}

#[inline(always)]
pub fn semver(input: &str) -> Version {
    Version::parse(input).unwrap()
}

#[inline(always)]
pub fn regex(re: &Regex, input: &str) -> Version {
    regex_parser(re, input).unwrap()
}

/// The regex suggested on semver.org, without any named group post-processing.
pub fn parsing_regex() -> Regex {
    Regex::new(r"^(?P<major>0|[1-9]\d*)\.(?P<minor>0|[1-9]\d*)\.(?P<patch>0|[1-9]\d*)(?:-(?P<prerelease>(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+(?P<buildmetadata>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$").unwrap()
}

pub fn regex_parser(re: &Regex, input: &str) -> Option<Version> {
    let caps = re.captures(input)?;

    let mut version = Version::new(
        caps.name("major")?.as_str().parse().ok()?,
        caps.name("minor")?.as_str().parse().ok()?,
        caps.name("patch")?.as_str().parse().ok()?,
    );

    if let Some(pre) = caps.name("prerelease") {
        version.pre = semver::Prerelease::new(pre.as_str()).ok()?;
    }
    if let Some(build) = caps.name("buildmetadata") {
        version.build = semver::BuildMetadata::new(build.as_str()).ok()?;
    }

    Some(version)
}
