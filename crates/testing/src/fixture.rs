// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Equijoin Contributors

use rand::{Rng, SeedableRng, distr::Alphanumeric, rngs::StdRng};

use crate::FixtureConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmployeeId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepartmentId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EquipmentId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rank(pub u8);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
	pub id: EmployeeId,
	pub name: String,
	pub age: u8,
	pub department_id: DepartmentId,
	pub rank: Rank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
	pub id: DepartmentId,
	pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equipment {
	pub id: EquipmentId,
	pub name: String,
	pub custodian: EmployeeId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryBand {
	pub department_id: DepartmentId,
	pub rank: Rank,
	pub amount: u64,
}

/// One coherent generated population.
///
/// Guarantees: every employee's department id exists exactly once in
/// `departments`; every (department, rank) pair an employee can carry has
/// exactly one salary band; equipment custodians scatter zero-to-many over
/// the employee id range.
#[derive(Debug, Clone)]
pub struct FixtureSet {
	pub employees: Vec<Employee>,
	pub departments: Vec<Department>,
	pub equipment: Vec<Equipment>,
	pub salary_bands: Vec<SalaryBand>,
}

impl FixtureSet {
	pub fn generate(config: &FixtureConfig) -> Self {
		let mut rng = StdRng::seed_from_u64(config.seed);

		let employees = (1..=config.employees as u32)
			.map(|id| Employee {
				id: EmployeeId(id),
				name: random_name(&mut rng),
				age: rng.random_range(18..65),
				department_id: DepartmentId(rng.random_range(1..=config.departments)),
				rank: Rank(rng.random_range(1..=config.ranks)),
			})
			.collect();

		let departments = (1..=config.departments)
			.map(|id| Department {
				id: DepartmentId(id),
				name: random_name(&mut rng),
			})
			.collect();

		let equipment = (1..=config.equipment as u32)
			.map(|id| Equipment {
				id: EquipmentId(id),
				name: random_name(&mut rng),
				custodian: EmployeeId(rng.random_range(1..=config.employees as u32)),
			})
			.collect();

		// Deterministic band table: one row per (department, rank) pair.
		let salary_bands = (1..=config.departments)
			.flat_map(|department| {
				(1..=config.ranks).map(move |rank| SalaryBand {
					department_id: DepartmentId(department),
					rank: Rank(rank),
					amount: u64::from(department) * 10_000 + u64::from(rank) * 1_000,
				})
			})
			.collect();

		Self {
			employees,
			departments,
			equipment,
			salary_bands,
		}
	}

	/// Population with one extra employee whose department does not exist:
	/// a guaranteed zero-match case for the one-to-one join.
	pub fn with_orphan_employee(config: &FixtureConfig) -> Self {
		let mut set = Self::generate(config);
		set.employees.push(Employee {
			id: EmployeeId(config.employees as u32 + 1),
			name: "orphan".to_string(),
			age: 40,
			department_id: DepartmentId(config.departments + 1),
			rank: Rank(1),
		});
		set
	}

	/// Population with the first employee's department duplicated: a
	/// guaranteed multi-match case for the one-to-one join.
	pub fn with_duplicate_department(config: &FixtureConfig) -> Self {
		let mut set = Self::generate(config);
		let target = set.employees.first().map(|employee| employee.department_id);
		if let Some(target) = target {
			if let Some(original) =
				set.departments.iter().find(|department| department.id == target).cloned()
			{
				set.departments.push(Department {
					name: format!("{} (copy)", original.name),
					..original
				});
			}
		}
		set
	}
}

fn random_name(rng: &mut StdRng) -> String {
	(&mut *rng).sample_iter(Alphanumeric).take(12).map(char::from).collect()
}
