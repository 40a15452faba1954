// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VirtualClinic Developers
// ABOUTME: Re-exports command modules for clinic-cli
// ABOUTME: Provides access to the populate and stats commands

pub mod populate;
pub mod stats;
