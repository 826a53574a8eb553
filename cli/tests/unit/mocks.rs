//! Shared mock infrastructure for unit tests.
//!
//! `FakeGateway` keeps an in-memory listing that register/deregister mutate,
//! and records every provider call so tests can assert on what was (not) sent.

#![allow(dead_code, clippy::expect_used)]

use std::cell::{Cell, RefCell};

use anyhow::{Result, bail};
use elba_cli::application::ports::{LoadBalancerGateway, TargetPicker};
use elba_cli::domain::{InstanceId, LoadBalancer};

// ── Listing helpers ──────────────────────────────────────────────────────────

pub fn lb(name: &str, instances: &[&str]) -> LoadBalancer {
    LoadBalancer::new(name, instances.iter().copied())
}

pub fn ids(raw: &[&str]) -> Vec<InstanceId> {
    raw.iter().map(|s| InstanceId::new(*s)).collect()
}

// ── Mock: in-memory ELB ──────────────────────────────────────────────────────

/// How the fake reacts to register/deregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behaviour {
    /// Apply the change.
    Apply,
    /// Accept the call but leave membership unchanged.
    Ignore,
    /// Fail the call.
    Fail,
}

pub struct FakeGateway {
    load_balancers: RefCell<Vec<LoadBalancer>>,
    calls: RefCell<Vec<String>>,
    mutations: Behaviour,
    fail_list: bool,
    fail_describe: Cell<bool>,
}

impl FakeGateway {
    pub fn new(load_balancers: Vec<LoadBalancer>) -> Self {
        Self {
            load_balancers: RefCell::new(load_balancers),
            calls: RefCell::new(Vec::new()),
            mutations: Behaviour::Apply,
            fail_list: false,
            fail_describe: Cell::new(false),
        }
    }

    pub fn with_mutations(mut self, behaviour: Behaviour) -> Self {
        self.mutations = behaviour;
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn fail_describe(&self) {
        self.fail_describe.set(true);
    }

    /// Remove a load balancer behind the session's back.
    pub fn delete(&self, name: &str) {
        self.load_balancers.borrow_mut().retain(|lb| lb.name != name);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Provider calls that change membership.
    pub fn mutation_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.starts_with("register") || c.starts_with("deregister"))
            .collect()
    }

    pub fn members(&self, name: &str) -> Vec<String> {
        self.load_balancers
            .borrow()
            .iter()
            .find(|lb| lb.name == name)
            .map(|lb| lb.instances.iter().map(ToString::to_string).collect())
            .unwrap_or_default()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn mutate(&self, name: &str, apply: impl FnOnce(&mut LoadBalancer)) -> Result<()> {
        match self.mutations {
            Behaviour::Fail => bail!("Throttling: Rate exceeded"),
            Behaviour::Ignore => Ok(()),
            Behaviour::Apply => {
                let mut lbs = self.load_balancers.borrow_mut();
                let Some(target) = lbs.iter_mut().find(|lb| lb.name == name) else {
                    bail!("LoadBalancerNotFound: There is no ACTIVE Load Balancer named '{name}'");
                };
                apply(target);
                Ok(())
            }
        }
    }
}

impl LoadBalancerGateway for FakeGateway {
    async fn list_load_balancers(&self) -> Result<Vec<LoadBalancer>> {
        self.record("list".to_string());
        if self.fail_list {
            bail!("UnrecognizedClientException: The security token included in the request is invalid");
        }
        Ok(self.load_balancers.borrow().clone())
    }

    async fn describe_load_balancer(&self, name: &str) -> Result<Option<LoadBalancer>> {
        self.record(format!("describe {name}"));
        if self.fail_describe.get() {
            bail!("connection reset by peer");
        }
        Ok(self
            .load_balancers
            .borrow()
            .iter()
            .find(|lb| lb.name == name)
            .cloned())
    }

    async fn register_instance(&self, name: &str, instance: &InstanceId) -> Result<()> {
        self.record(format!("register {name} {instance}"));
        self.mutate(name, |lb| {
            lb.instances.insert(instance.clone());
        })
    }

    async fn deregister_instance(&self, name: &str, instance: &InstanceId) -> Result<()> {
        self.record(format!("deregister {name} {instance}"));
        self.mutate(name, |lb| {
            lb.instances.remove(instance);
        })
    }
}

// ── Mock: disambiguation prompt ──────────────────────────────────────────────

/// Answers the prompt with a fixed sequence of indices.
pub struct ScriptedPicker {
    answers: RefCell<Vec<usize>>,
    asked: Cell<usize>,
}

impl ScriptedPicker {
    pub fn answering(answers: &[usize]) -> Self {
        let mut answers = answers.to_vec();
        answers.reverse();
        Self {
            answers: RefCell::new(answers),
            asked: Cell::new(0),
        }
    }

    pub fn asked(&self) -> usize {
        self.asked.get()
    }
}

impl TargetPicker for ScriptedPicker {
    fn can_prompt(&self) -> bool {
        true
    }

    fn pick(&self, _: &[LoadBalancer]) -> Result<usize> {
        self.asked.set(self.asked.get() + 1);
        self.answers
            .borrow_mut()
            .pop()
            .ok_or_else(|| anyhow::anyhow!("no more scripted answers"))
    }
}

/// Non-interactive session: must never be asked.
pub struct NoPrompt;

impl TargetPicker for NoPrompt {
    fn can_prompt(&self) -> bool {
        false
    }

    fn pick(&self, _: &[LoadBalancer]) -> Result<usize> {
        bail!("prompt is not expected in this test")
    }
}
