//! Defines the x86 instruction set extensions known to the registry
//!
//! Every extension is a variant of [`Arch`]. Each variant carries three static strings:
//! * its canonical identifier, e.g. `AVX512_VL` or `ARCH_386`
//! * its display form, which is the identifier except for the numeric CPU generations and 3DNow,
//!   e.g. `386` or `3DNOW`
//! * a short human readable description, empty when none has been written
//!
//! Extensions carry no relation between them: `AVX2` does not imply `AVX`, and declaration order
//! is only used to give the enum a stable total order.

use std::{fmt::Display, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{arch_alias::parse_alias, ArchError};

/// Internal macro used to define all extensions in the [`Arch`] enum
macro_rules! define_arches {
    ( $( ($name:ident, $str_name:expr, $display:expr, $doc:expr) ),* $(,)? ) => {
        /// Represents an x86 instruction set extension or CPU generation.
        ///
        /// [`Arch::None`] stands for "no extension" and is what unrecognized names parse to.
        #[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Hash, PartialOrd, Ord)]
        pub enum Arch {
            #[default]
            $(
                $name,
            )*
        }

        impl Arch {
            /// Every extension, in declaration order
            pub const ALL: &'static [Arch] = &[
                $(
                    Self::$name,
                )*
            ];

            /// Returns the canonical identifier of the extension
            pub const fn name(&self) -> &'static str {
                match self {
                    $(
                        Self::$name => $str_name,
                    )*
                }
            }

            /// Returns the display form of the extension
            pub const fn to_str(&self) -> &'static str {
                match self {
                    $(
                        Self::$name => $display,
                    )*
                }
            }

            /// Returns a short description of the extension, or an empty string if there is none
            pub const fn documentation(&self) -> &'static str {
                match self {
                    $(
                        Self::$name => $doc,
                    )*
                }
            }

            /// Attempts to create an [`Arch`] from its canonical identifier, returning an error if
            /// the identifier is unknown. The match is exact and case sensitive.
            pub fn try_from_name(st: &str) -> Result<Arch, ArchError> {
                match st {
                    $(
                        $str_name => Ok(Self::$name),
                    )*
                    _ => Err(ArchError::UnknownName(st.to_string())),
                }
            }
        }
    };
}

// The `#[default]` attribute above lands on the first variant, so `None` must stay first
define_arches! {
    (None, "NONE", "NONE", ""),

    (I8086, "ARCH_8086", "8086", ""),
    (I186, "ARCH_186", "186", ""),
    (I286, "ARCH_286", "286", ""),
    (I386, "ARCH_386", "386", ""),
    (I486, "ARCH_486", "486", ""),
    (Pent, "PENT", "PENT", "Instruction set of the Pentium, 1994 (also known as i586)"),
    (P6, "P6", "P6", "Instruction set of the Pentium 6, 1995 (also known as i686)"),

    (Mmx, "MMX", "MMX", ""),

    (Sse, "SSE", "SSE", ""),
    (Sse2, "SSE2", "SSE2", ""),
    (Sse3, "SSE3", "SSE3", ""),
    (Ssse3, "SSSE3", "SSSE3", ""),
    (Sse41, "SSE4_1", "SSE4_1", ""),
    (Sse42, "SSE4_2", "SSE4_2", ""),
    (Sse4a, "SSE4A", "SSE4A", "Instruction set SSE4A, AMD"),
    (Sse5, "SSE5", "SSE5", "Instruction set SSE5, AMD"),

    (Avx, "AVX", "AVX", ""),
    (Avx2, "AVX2", "AVX2", ""),

    // Knights Landing and Xeon
    (Avx512F, "AVX512_F", "AVX512_F", "AVX512-F - Foundation"),
    (Avx512Cd, "AVX512_CD", "AVX512_CD", "AVX512-CD - Conflict Detection"),
    (Avx512Er, "AVX512_ER", "AVX512_ER", "AVX512-ER - Exponential and Reciprocal"),
    (Avx512Pf, "AVX512_PF", "AVX512_PF", "AVX512-PF - Prefetch"),
    (Avx512Bw, "AVX512_BW", "AVX512_BW", "AVX512-BW - Byte and Word"),
    (Avx512Dq, "AVX512_DQ", "AVX512_DQ", "AVX512-DQ - Doubleword and QuadWord"),
    (Avx512Vl, "AVX512_VL", "AVX512_VL", "AVX512-VL - Vector Length Extensions"),

    // Cannon Lake
    (Avx512Ifma, "AVX512_IFMA", "AVX512_IFMA", "AVX512-IFMA - Integer Fused Multiply Add"),
    (
        Avx512Vbmi,
        "AVX512_VBMI",
        "AVX512_VBMI",
        "AVX512-VBMI - Vector Byte Manipulation Instructions"
    ),

    // Knights Mill
    (
        Avx512Vpopcntdq,
        "AVX512_VPOPCNTDQ",
        "AVX512_VPOPCNTDQ",
        "AVX512-VPOPCNTDQ - Vector Population Count instructions for Dwords and Qwords"
    ),
    (
        Avx5124Vnniw,
        "AVX512_4VNNIW",
        "AVX512_4VNNIW",
        "AVX512-4VNNIW - Vector Neural Network Instructions Word variable precision"
    ),
    (
        Avx5124Fmaps,
        "AVX512_4FMAPS",
        "AVX512_4FMAPS",
        "AVX512-4FMAPS - Fused Multiply Accumulation Packed Single precision"
    ),

    // Ice Lake
    (Avx512Vbmi2, "AVX512_VBMI2", "AVX512_VBMI2", ""),
    (Avx512Vnni, "AVX512_VNNI", "AVX512_VNNI", ""),
    (Avx512Bitalg, "AVX512_BITALG", "AVX512_BITALG", ""),
    (Avx512Gfni, "AVX512_GFNI", "AVX512_GFNI", ""),
    (Avx512Vaes, "AVX512_VAES", "AVX512_VAES", ""),
    (Avx512Vpclmulqdq, "AVX512_VPCLMULQDQ", "AVX512_VPCLMULQDQ", ""),

    (Adx, "ADX", "ADX", "Multi-Precision Add-Carry Instruction Extension"),
    (Aes, "AES", "AES", "Advanced Encryption Standard Extension"),
    (Vmx, "VMX", "VMX", "Virtual Machine Extension"),
    (Bmi1, "BMI1", "BMI1", "Bit Manipulation Instruction Set 1"),
    (Bmi2, "BMI2", "BMI2", "Bit Manipulation Instruction Set 2"),
    (F16c, "F16C", "F16C", "Half Precision Floating Point Conversion Instructions"),
    (Fma, "FMA", "FMA", "Fused Multiply-Add Instructions"),
    (Fsgsbase, "FSGSBASE", "FSGSBASE", ""),
    (Hle, "HLE", "HLE", "Hardware Lock Elision Instructions"),
    (Invpcid, "INVPCID", "INVPCID", "Invalidate Translation Lookaside Buffers (TLBs)"),
    (Sha, "SHA", "SHA", "Secure Hash Algorithm Extensions"),
    (Rtm, "RTM", "RTM", "Transactional Synchronization Extensions"),
    (Mpx, "MPX", "MPX", "Memory Protection Extensions"),
    (Pclmulqdq, "PCLMULQDQ", "PCLMULQDQ", "Carry-Less Multiplication Instructions"),
    (Lzcnt, "LZCNT", "LZCNT", ""),
    (Prefetchwt1, "PREFETCHWT1", "PREFETCHWT1", ""),
    (Prfchw, "PRFCHW", "PRFCHW", ""),
    (Rdpid, "RDPID", "RDPID", "Read processor ID"),
    (Rdrand, "RDRAND", "RDRAND", "Read random number"),
    (Rdseed, "RDSEED", "RDSEED", "Read random seed"),
    (Xsaveopt, "XSAVEOPT", "XSAVEOPT", "Save Processor Extended States Optimized"),

    (Sgx1, "SGX1", "SGX1", ""),
    (Sgx2, "SGX2", "SGX2", ""),
    (Smx, "SMX", "SMX", ""),

    (X64, "X64", "X64", "64-bit Mode Instructions"),
    (Ia64, "IA64", "IA64", "Intel Architecture 64"),
    (Undoc, "UNDOC", "UNDOC", "Undocumented Instructions"),

    (Amd, "AMD", "AMD", "AMD"),
    (Tbm, "TBM", "TBM", "Trailing Bit Manipulation (AMD)"),
    (ThreeDNow, "ARCH_3DNOW", "3DNOW", "3DNow (AMD)"),

    (Cyrix, "CYRIX", "CYRIX", "Cyrix Instructions Set"),
    (CyrixM, "CYRIXM", "CYRIXM", "Cyrix M Instruction Set"),
}

impl Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Strict counterpart of [`crate::parse_arch`]: same aliases, but an unknown name is an error and
/// nothing is logged
impl FromStr for Arch {
    type Err = ArchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_alias(s).ok_or_else(|| ArchError::UnknownArch(s.to_string()))
    }
}

impl Serialize for Arch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_str())
    }
}

impl<'de> Deserialize<'de> for Arch {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
