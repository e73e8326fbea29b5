//! Parses free-form extension names into [`Arch`] values
//!
//! Names are normalized before lookup by removing every underscore and converting to upper case,
//! so `sse4_1`, `SSE41` and `Sse_4_1` are the same name. Several aliases can resolve to the same
//! extension, e.g. all the XSAVE flavours resolve to [`Arch::Xsaveopt`].

use std::{collections::HashMap, sync::LazyLock};

use crate::Arch;

/// Accepted names, already normalized, and the extension each one resolves to
static ALIASES: &[(&str, Arch)] = &[
    ("NONE", Arch::None),
    ("8086", Arch::I8086),
    ("186", Arch::I186),
    ("286", Arch::I286),
    ("386", Arch::I386),
    ("486", Arch::I486),
    ("PENT", Arch::Pent),
    ("P6", Arch::P6),
    ("MMX", Arch::Mmx),
    ("SSE", Arch::Sse),
    ("SSE2", Arch::Sse2),
    ("SSE3", Arch::Sse3),
    ("SSSE3", Arch::Ssse3),
    ("SSE41", Arch::Sse41),
    ("SSE42", Arch::Sse42),
    ("SSE4A", Arch::Sse4a),
    ("SSE5", Arch::Sse5),
    ("AVX", Arch::Avx),
    ("AVX2", Arch::Avx2),
    ("AVX512VL", Arch::Avx512Vl),
    ("AVX512DQ", Arch::Avx512Dq),
    ("AVX512BW", Arch::Avx512Bw),
    ("AVX512ER", Arch::Avx512Er),
    ("AVX512F", Arch::Avx512F),
    ("AVX512CD", Arch::Avx512Cd),
    ("AVX512PF", Arch::Avx512Pf),
    ("AVX512IFMA", Arch::Avx512Ifma),
    ("AVX512VBMI", Arch::Avx512Vbmi),
    ("AVX512VPOPCNTDQ", Arch::Avx512Vpopcntdq),
    ("AVX5124VNNIW", Arch::Avx5124Vnniw),
    ("AVX5124FMAPS", Arch::Avx5124Fmaps),
    ("VBMI2", Arch::Avx512Vbmi2),
    ("AVX512VBMI2", Arch::Avx512Vbmi2),
    ("VNNI", Arch::Avx512Vnni),
    ("AVX512VNNI", Arch::Avx512Vnni),
    ("BITALG", Arch::Avx512Bitalg),
    ("AVX512BITALG", Arch::Avx512Bitalg),
    ("GFNI", Arch::Avx512Gfni),
    ("AVX512GFNI", Arch::Avx512Gfni),
    ("VAES", Arch::Avx512Vaes),
    ("AVX512VAES", Arch::Avx512Vaes),
    ("VPCLMULQDQ", Arch::Avx512Vpclmulqdq),
    ("AVX512VPCLMULQDQ", Arch::Avx512Vpclmulqdq),
    ("HLE", Arch::Hle),
    ("BMI1", Arch::Bmi1),
    ("BMI2", Arch::Bmi2),
    ("FMA", Arch::Fma),
    ("AES", Arch::Aes),
    ("TBM", Arch::Tbm),
    ("AMD", Arch::Amd),
    ("3DNOW", Arch::ThreeDNow),
    ("IA64", Arch::Ia64),
    ("CYRIX", Arch::Cyrix),
    ("CYRIXM", Arch::CyrixM),
    ("INVPCID", Arch::Invpcid),
    ("VMX", Arch::Vmx),
    ("ADX", Arch::Adx),
    ("X64", Arch::X64),
    ("PCLMULQDQ", Arch::Pclmulqdq),
    ("PRFCHW", Arch::Prfchw),
    ("RDPID", Arch::Rdpid),
    ("RDRAND", Arch::Rdrand),
    ("RDSEED", Arch::Rdseed),
    ("XSAVEOPT", Arch::Xsaveopt),
    ("XSS", Arch::Xsaveopt),
    ("XSAVE", Arch::Xsaveopt),
    ("XSAVEC", Arch::Xsaveopt),
    ("FSGSBASE", Arch::Fsgsbase),
    ("LZCNT", Arch::Lzcnt),
    ("F16C", Arch::F16c),
    ("MPX", Arch::Mpx),
    ("SHA", Arch::Sha),
    ("RTM", Arch::Rtm),
    ("PREFETCHWT1", Arch::Prefetchwt1),
    ("SGX1", Arch::Sgx1),
    ("SGX2", Arch::Sgx2),
    ("SMX", Arch::Smx),
    ("UNDOC", Arch::Undoc),
];

static ALIAS_MAP: LazyLock<HashMap<&'static str, Arch>> =
    LazyLock::new(|| ALIASES.iter().copied().collect());

/// Removes every underscore from `name` and converts the result to upper case
pub fn normalize_arch_name(name: &str) -> String {
    name.chars().filter(|c| *c != '_').map(|c| c.to_ascii_uppercase()).collect()
}

/// Looks `name` up in the alias table after normalizing it
pub(crate) fn parse_alias(name: &str) -> Option<Arch> {
    ALIAS_MAP.get(normalize_arch_name(name).as_str()).copied()
}

/// Parses a free-form extension name, returning [`Arch::None`] if it is not recognized.
///
/// When `warn` is set, an unrecognized name is reported with a warning that carries the name as
/// it was given. This function never fails; use `str::parse::<Arch>()` to get an error instead.
pub fn parse_arch(name: &str, warn: bool) -> Arch {
    match parse_alias(name) {
        Some(arch) => arch,
        None => {
            if warn {
                tracing::warn!("parse_arch: no arch for str {}", name);
            }
            Arch::None
        }
    }
}

impl Arch {
    /// Returns every normalized name that [`parse_arch`] accepts for this extension
    pub fn aliases(self) -> impl Iterator<Item = &'static str> {
        ALIASES.iter().filter(move |(_, arch)| *arch == self).map(|(alias, _)| *alias)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::Write,
        sync::{Arc, Mutex},
    };

    use super::*;

    #[derive(Clone, Default)]
    struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

    impl CapturedOutput {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for CapturedOutput {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Runs `f` with a subscriber that writes every event into the returned buffer
    fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let output = CapturedOutput::default();
        let writer = output.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        (result, output.contents())
    }

    #[test]
    fn every_alias_resolves() {
        for (alias, arch) in ALIASES {
            assert_eq!(parse_arch(alias, false), *arch, "alias {alias}");
            assert_eq!(parse_arch(&alias.to_lowercase(), false), *arch, "alias {alias}");
        }
    }

    #[test]
    fn aliases_are_normalized_and_unique() {
        for (i, (alias, _)) in ALIASES.iter().enumerate() {
            assert_eq!(normalize_arch_name(alias), *alias);
            assert!(ALIASES[i + 1..].iter().all(|(other, _)| other != alias), "duplicate {alias}");
        }
    }

    #[test]
    fn case_and_underscores_are_ignored() {
        assert_eq!(parse_arch("avx_512_vl", false), Arch::Avx512Vl);
        assert_eq!(parse_arch("AVX512VL", false), Arch::Avx512Vl);
        assert_eq!(parse_arch("Avx512Vl", false), Arch::Avx512Vl);
        assert_eq!(parse_arch("sse4_1", false), Arch::Sse41);
        assert_eq!(parse_arch("SSE41", false), Arch::Sse41);
        assert_eq!(parse_arch("_s_s_e_4_2_", false), Arch::Sse42);
    }

    #[test]
    fn only_ascii_letters_are_upper_cased() {
        assert_eq!(normalize_arch_name("sße3"), "SßE3");
        assert_eq!(normalize_arch_name("ıa64"), "ıA64");
        assert_eq!(parse_arch("sße3", false), Arch::None);
        assert_eq!(parse_arch("ıa64", false), Arch::None);
        assert!("sße3".parse::<Arch>().is_err());
    }

    #[test]
    fn several_aliases_share_an_arch() {
        for alias in ["XSS", "XSAVE", "XSAVEC", "XSAVEOPT"] {
            assert_eq!(parse_arch(alias, false), Arch::Xsaveopt);
        }
        assert_eq!(parse_arch("vnni", false), Arch::Avx512Vnni);
        assert_eq!(parse_arch("avx512_vnni", false), Arch::Avx512Vnni);
        assert_eq!(
            Arch::Xsaveopt.aliases().collect::<Vec<_>>(),
            ["XSAVEOPT", "XSS", "XSAVE", "XSAVEC"]
        );
        assert_eq!(Arch::Avx512Gfni.aliases().collect::<Vec<_>>(), ["GFNI", "AVX512GFNI"]);
    }

    #[test]
    fn every_arch_has_an_alias() {
        for arch in Arch::ALL {
            assert!(arch.aliases().next().is_some(), "{arch:?} has no alias");
        }
    }

    #[test]
    fn display_form_parses_back() {
        for arch in Arch::ALL {
            assert_eq!(parse_arch(arch.to_str(), false), *arch);
        }
    }

    #[test]
    fn canonical_name_of_numeric_generations_is_not_an_alias() {
        assert_eq!(parse_arch("ARCH_386", false), Arch::None);
        assert_eq!(parse_arch("ARCH_3DNOW", false), Arch::None);
        assert_eq!(parse_arch(Arch::I8086.name(), false), Arch::None);
    }

    #[test]
    fn unknown_name_without_warning() {
        let (arch, logs) = capture_logs(|| parse_arch("not-a-real-extension", false));
        assert_eq!(arch, Arch::None);
        assert!(logs.is_empty(), "unexpected output: {logs}");
    }

    #[test]
    fn unknown_name_with_warning() {
        let (arch, logs) = capture_logs(|| parse_arch("not-a_real-extension", true));
        assert_eq!(arch, Arch::None);
        assert_eq!(logs.lines().count(), 1, "output: {logs}");
        assert!(logs.contains("WARN"));
        assert!(logs.contains("not-a_real-extension"));
    }

    #[test]
    fn known_name_does_not_warn() {
        let (arch, logs) = capture_logs(|| parse_arch("bmi1", true));
        assert_eq!(arch, Arch::Bmi1);
        assert!(logs.is_empty(), "unexpected output: {logs}");
    }
}
