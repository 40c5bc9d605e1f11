/*
 * Copyright (c) 2003-2025. Trevor Campbell and others.
 *
 * This file is part of Kelpie Performance Model.
 *
 * Kelpie Performance Model is free software; you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation; either version 2 of the License, or
 * (at your option) any later version.
 *
 * Kelpie Performance Model is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Kelpie Performance Model; if not, write to the Free Software
 * Foundation, Inc., 59 Temple Place, Suite 330, Boston, MA  02111-1307  USA
 *
 * Contributors:
 *      Trevor Campbell
 *
 */
use std::fs::File;
use std::path::Path;

use log::warn;

use crate::model::snapshot::PerformanceDataSnapshot;

pub fn read_snapshot(file_path: &Path) -> Result<PerformanceDataSnapshot, String> {
    let file = match File::open(file_path) {
        Ok(file) => file,
        Err(_) => return Err(String::from("Error reading file")),
    };
    match serde_json::from_reader(file) {
        Ok(snapshot) => Ok(snapshot),
        Err(e) => {
            warn!("Invalid performance data snapshot: {}", e);
            Err(String::from("Error parsing snapshot"))
        }
    }
}

pub fn write_snapshot(snapshot: &PerformanceDataSnapshot, file_path: &Path) -> Result<(), String> {
    let out = match File::create(file_path) {
        Ok(file) => file,
        Err(_) => return Err(String::from("Error creating file")),
    };
    match serde_json::to_writer_pretty(out, snapshot) {
        Ok(()) => Ok(()),
        Err(e) => {
            warn!("Unable to save performance data snapshot: {}", e);
            Err(String::from("Error writing snapshot"))
        }
    }
}
