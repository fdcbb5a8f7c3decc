///
/// @package gflags-rs
///
/// @file Flag table functions
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use bitflags::bitflags;
use strum_macros::Display;

bitflags! {
    /// Global flag bits understood by the OS loader, heap manager and kernel
    #[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
    pub(crate) struct GlobalFlags: u32 {
        const STOP_ON_EXCEPTION = 0x1;
        const SHOW_LDR_SNAPS = 0x2;
        const DEBUG_INITIAL_COMMAND = 0x4;
        const STOP_ON_HUNG_GUI = 0x8;
        const HEAP_ENABLE_TAIL_CHECK = 0x10;
        const HEAP_ENABLE_FREE_CHECK = 0x20;
        const HEAP_VALIDATE_PARAMETERS = 0x40;
        const HEAP_VALIDATE_ALL = 0x80;
        const APPLICATION_VERIFIER = 0x100;
        const MONITOR_SILENT_PROCESS_EXIT = 0x200; // No abbreviation
        const POOL_ENABLE_TAGGING = 0x400;
        const HEAP_ENABLE_TAGGING = 0x800;
        const USER_STACK_TRACE_DB = 0x1000;
        const KERNEL_STACK_TRACE_DB = 0x2000;
        const MAINTAIN_OBJECT_TYPELIST = 0x4000;
        const HEAP_ENABLE_TAG_BY_DLL = 0x8000;
        const DISABLE_STACK_EXTENSION = 0x10000;
        const ENABLE_CSRDEBUG = 0x20000;
        const ENABLE_KDEBUG_SYMBOL_LOAD = 0x40000;
        const DISABLE_PAGE_KERNEL_STACKS = 0x80000;
        const ENABLE_SYSTEM_CRIT_BREAKS = 0x100000;
        const HEAP_DISABLE_COALESCING = 0x200000;
        const ENABLE_CLOSE_EXCEPTIONS = 0x400000;
        const ENABLE_EXCEPTION_LOGGING = 0x800000;
        const ENABLE_HANDLE_TYPE_TAGGING = 0x1000000;
        const HEAP_PAGE_ALLOCS = 0x2000000;
        const DEBUG_INITIAL_COMMAND_EX = 0x4000000;
        const DISABLE_DBGPRINT = 0x8000000;
        const CRITSEC_EVENT_CREATION = 0x10000000;
        const STOP_ON_UNHANDLED_EXCEPTION = 0x20000000;
        const ENABLE_HANDLE_EXCEPTIONS = 0x40000000;
        const DISABLE_PROTDLLS = 0x80000000;
    }
}

bitflags! {
    /// Destinations a flag value can live in
    #[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
    pub(crate) struct Dest: u8 {
        const REGISTRY = 1 << 0; // Boot defaults in the system registry
        const KERNEL = 1 << 1; // Live value of the running kernel
        const IMAGE = 1 << 2; // Per-image override
    }
}

/// A single selected destination, as opposed to the [`Dest`] membership sets
/// carried by the flag table
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub(crate) enum Destination {
    #[strum(to_string = "Boot Registry")]
    Registry,
    #[strum(to_string = "Running Kernel")]
    Kernel,
    #[strum(to_string = "Image File")]
    Image,
}

impl Destination {
    pub(crate) fn as_flag(self) -> Dest {
        match self {
            Destination::Registry => Dest::REGISTRY,
            Destination::Kernel => Dest::KERNEL,
            Destination::Image => Dest::IMAGE,
        }
    }
}

#[derive(Debug)]
pub(crate) struct FlagInfo {
    pub(crate) flag: GlobalFlags,
    pub(crate) abbr: &'static str,
    pub(crate) dest: Dest,
    pub(crate) desc: &'static str,
}

impl FlagInfo {
    pub(crate) fn bit(&self) -> u32 {
        self.flag.bits()
    }
}

const fn flag(flag: GlobalFlags, abbr: &'static str, dest: Dest, desc: &'static str) -> FlagInfo {
    FlagInfo { flag, abbr, dest, desc }
}

const RK: Dest = Dest::REGISTRY.union(Dest::KERNEL);

// Table from https://msdn.microsoft.com/en-us/library/windows/hardware/ff549596(v=vs.85).aspx
const FLAGS: &[FlagInfo] = &[
    flag(GlobalFlags::STOP_ON_EXCEPTION, "soe", Dest::all(), "Stop on exception"),
    flag(GlobalFlags::SHOW_LDR_SNAPS, "sls", Dest::all(), "Show loader snaps"),
    flag(GlobalFlags::DEBUG_INITIAL_COMMAND, "dic", Dest::REGISTRY, "Debug initial command"),
    flag(GlobalFlags::STOP_ON_HUNG_GUI, "shg", Dest::KERNEL, "Stop on hung GUI"),
    flag(GlobalFlags::HEAP_ENABLE_TAIL_CHECK, "htc", Dest::all(), "Enable heap tail checking"),
    flag(GlobalFlags::HEAP_ENABLE_FREE_CHECK, "hfc", Dest::all(), "Enable heap free checking"),
    flag(GlobalFlags::HEAP_VALIDATE_PARAMETERS, "hpc", Dest::all(), "Enable heap parameter checking"),
    flag(GlobalFlags::HEAP_VALIDATE_ALL, "hvc", Dest::all(), "Enable heap validation on call"),
    flag(GlobalFlags::APPLICATION_VERIFIER, "vrf", Dest::all(), "Enable application verifier"),
    flag(GlobalFlags::POOL_ENABLE_TAGGING, "ptg", Dest::REGISTRY, "Enable pool tagging"),
    flag(GlobalFlags::HEAP_ENABLE_TAGGING, "htg", Dest::all(), "Enable heap tagging"),
    flag(GlobalFlags::USER_STACK_TRACE_DB, "ust", Dest::all(), "Create user mode stack trace database"),
    flag(GlobalFlags::KERNEL_STACK_TRACE_DB, "kst", Dest::REGISTRY, "Create kernel mode stack trace database"),
    flag(GlobalFlags::MAINTAIN_OBJECT_TYPELIST, "otl", Dest::REGISTRY, "Maintain a list of objects for each type"),
    flag(GlobalFlags::HEAP_ENABLE_TAG_BY_DLL, "htd", Dest::all(), "Enable heap tagging by DLL"),
    flag(GlobalFlags::DISABLE_STACK_EXTENSION, "dse", Dest::IMAGE, "Disable stack extension"),
    flag(GlobalFlags::ENABLE_CSRDEBUG, "d32", Dest::REGISTRY, "Enable debugging of Win32 subsystem"),
    flag(GlobalFlags::ENABLE_KDEBUG_SYMBOL_LOAD, "ksl", RK, "Enable loading of kernel debugger symbols"),
    flag(GlobalFlags::DISABLE_PAGE_KERNEL_STACKS, "dps", Dest::REGISTRY, "Disable paging of kernel stacks"),
    flag(GlobalFlags::ENABLE_SYSTEM_CRIT_BREAKS, "scb", Dest::all(), "Enable system critical breaks"),
    flag(GlobalFlags::HEAP_DISABLE_COALESCING, "dhc", Dest::all(), "Disable heap coalesce on free"),
    flag(GlobalFlags::ENABLE_CLOSE_EXCEPTIONS, "ece", RK, "Enable close exception"),
    flag(GlobalFlags::ENABLE_EXCEPTION_LOGGING, "eel", RK, "Enable exception logging"),
    flag(GlobalFlags::ENABLE_HANDLE_TYPE_TAGGING, "eot", RK, "Enable object handle type tagging"),
    flag(GlobalFlags::HEAP_PAGE_ALLOCS, "hpa", Dest::all(), "Enable page heap"),
    flag(GlobalFlags::DEBUG_INITIAL_COMMAND_EX, "dwl", Dest::REGISTRY, "Debug WinLogon"),
    flag(GlobalFlags::DISABLE_DBGPRINT, "ddp", RK, "Buffer DbgPrint Output"),
    flag(GlobalFlags::CRITSEC_EVENT_CREATION, "cse", Dest::all(), "Early critical section event creation"),
    flag(GlobalFlags::STOP_ON_UNHANDLED_EXCEPTION, "sue", Dest::all(), "Stop on unhandled user-mode exception"),
    flag(GlobalFlags::ENABLE_HANDLE_EXCEPTIONS, "bhd", RK, "Enable bad handles detection"),
    flag(GlobalFlags::DISABLE_PROTDLLS, "dpd", Dest::all(), "Disable protected DLL verification"),
];

/// Static table of all known flags in stable declaration order
///
/// The table is immutable for the lifetime of the process; lookups by
/// abbreviation are case-insensitive.
#[derive(Debug, Copy, Clone)]
pub(crate) struct FlagTable {
    entries: &'static [FlagInfo],
}

impl FlagTable {
    pub(crate) fn builtin() -> Self {
        Self { entries: FLAGS }
    }

    /// Find a flag by abbreviation
    ///
    /// # Arguments
    ///
    /// * `abbr` - Abbreviation to look up, compared case-insensitively
    ///
    /// # Returns
    ///
    /// The matching [`FlagInfo`] or [`None`]; an unknown abbreviation is a
    /// normal negative result, not an error
    pub(crate) fn lookup(&self, abbr: &str) -> Option<&'static FlagInfo> {
        self.entries.iter().find(|info| info.abbr.eq_ignore_ascii_case(abbr))
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &'static FlagInfo> {
        self.entries.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
