// Copyright 2021 Drift Labs
// Copyright 2025 INSTADAPP LABS INC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Portions of this code are derived from Drift Protocol
// Original source: https://github.com/drift-labs/protocol-v2/blob/master/programs/drift/src/math/safe_math.rs
// Modified by INSTADAPP LABS INC
// Modified: reduced to checked u64 add/sub/div failing with `VaultError::MathOverflow`

use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use std::panic::Location;

use crate::errors::VaultError;

pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self) -> Result<Self>;
    fn safe_sub(self, rhs: Self) -> Result<Self>;
    fn safe_div(self, rhs: Self) -> Result<Self>;
}

#[track_caller]
fn math_error() -> Error {
    let caller = Location::caller();
    msg!("Math error thrown at {}:{}", caller.file(), caller.line());
    error!(VaultError::MathOverflow)
}

impl SafeMath for u64 {
    #[track_caller]
    #[inline(always)]
    fn safe_add(self, v: u64) -> Result<u64> {
        match self.checked_add(v) {
            Some(result) => Ok(result),
            None => Err(math_error()),
        }
    }

    #[track_caller]
    #[inline(always)]
    fn safe_sub(self, v: u64) -> Result<u64> {
        match self.checked_sub(v) {
            Some(result) => Ok(result),
            None => Err(math_error()),
        }
    }

    #[track_caller]
    #[inline(always)]
    fn safe_div(self, v: u64) -> Result<u64> {
        match self.checked_div(v) {
            Some(result) => Ok(result),
            None => Err(math_error()),
        }
    }
}

/// Lamports paid out for `buy_size` token base units, rounded down.
pub fn quote_sol_out(buy_size: u64, rate: u64) -> Result<u64> {
    buy_size.safe_div(rate)
}
