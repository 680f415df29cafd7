// Copyright (c) 2026 the codepack contributors
// SPDX-License-Identifier: Apache-2.0

pub mod args;
pub mod config;
