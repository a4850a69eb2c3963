#![cfg_attr(not(feature = "std"), no_std)]

#[ink::contract]
mod scrip {
    use ink::storage::Mapping;

    pub type Result<T> = core::result::Result<T, Error>;

    #[derive(scale::Encode, scale::Decode, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub enum Error {
        InsufficientBalance,
        InsufficientAllowance,
        Overflow,
        Unauthorized,
        NotOwner,
        Paused,
    }

    #[ink(event)]
    pub struct Transferred {
        #[ink(topic)]
        from_acc: AccountId,
        #[ink(topic)]
        to_acc: AccountId,
        amount: Balance,
    }

    #[ink(event)]
    pub struct Minted {
        #[ink(topic)]
        to_acc: AccountId,
        amount: Balance,
    }

    #[ink(event)]
    pub struct Burned {
        #[ink(topic)]
        from_acc: AccountId,
        amount: Balance,
    }

    #[ink(event)]
    pub struct Approved {
        #[ink(topic)]
        owner_acc: AccountId,
        #[ink(topic)]
        spender_acc: AccountId,
        amount: Balance,
    }

    #[ink(event)]
    pub struct MinterSet {
        #[ink(topic)]
        minter_acc: AccountId,
        enabled_flag: bool,
    }

    #[ink(event)]
    pub struct PausedSet {
        paused_flag: bool,
    }

    #[ink(storage)]
    pub struct Scrip {
        // governance / control
        owner_acc: AccountId,
        paused_flag: bool,
        is_minter: Mapping<AccountId, bool>,

        // ledger state; absent mapping entries read as zero
        total_supply: Balance,
        balances: Mapping<AccountId, Balance>,
        allowances: Mapping<(AccountId, AccountId), Balance>,
    }

    impl Scrip {
        /// Create the ledger with `initial_supply` fully credited to the
        /// deployer, who also becomes the owner.
        #[ink(constructor)]
        pub fn new(initial_supply: Balance) -> Self {
            let deployer_acc = Self::env().caller();
            let mut balances = Mapping::default();
            balances.insert(&deployer_acc, &initial_supply);
            Self::env().emit_event(Minted {
                to_acc: deployer_acc,
                amount: initial_supply,
            });
            Self {
                owner_acc: deployer_acc,
                paused_flag: false,
                is_minter: Mapping::default(),
                total_supply: initial_supply,
                balances,
                allowances: Mapping::default(),
            }
        }

        // -------- modifiers (helpers) --------

        fn only_owner(&self) -> Result<()> {
            if self.env().caller() != self.owner_acc {
                return Err(Error::NotOwner)
            }
            Ok(())
        }

        fn when_not_paused(&self) -> Result<()> {
            if self.paused_flag {
                return Err(Error::Paused)
            }
            Ok(())
        }

        /// Mint/privileged-burn rights: the owner, or any account the owner
        /// registered as a minter.
        fn is_issuer(&self, acc: AccountId) -> bool {
            acc == self.owner_acc || self.is_minter.get(&acc).unwrap_or(false)
        }

        // -------- admin / roles --------

        #[ink(message)]
        pub fn set_pause(&mut self, paused_flag: bool) -> Result<()> {
            self.only_owner()?;
            self.paused_flag = paused_flag;
            self.env().emit_event(PausedSet { paused_flag });
            Ok(())
        }

        #[ink(message)]
        pub fn set_minter(&mut self, minter_acc: AccountId, enabled_flag: bool) -> Result<()> {
            self.only_owner()?;
            self.is_minter.insert(&minter_acc, &enabled_flag);
            self.env().emit_event(MinterSet { minter_acc, enabled_flag });
            Ok(())
        }

        // -------- read API --------

        #[ink(message)]
        pub fn total_supply(&self) -> Balance {
            self.total_supply
        }

        #[ink(message)]
        pub fn balance_of(&self, owner_acc: AccountId) -> Balance {
            self.balances.get(&owner_acc).unwrap_or(0)
        }

        #[ink(message)]
        pub fn my_balance(&self) -> Balance {
            let caller_acc = self.env().caller();
            self.balance_of(caller_acc)
        }

        #[ink(message)]
        pub fn allowance(&self, owner_acc: AccountId, spender_acc: AccountId) -> Balance {
            self.allowances.get(&(owner_acc, spender_acc)).unwrap_or(0)
        }

        #[ink(message)]
        pub fn owner(&self) -> AccountId {
            self.owner_acc
        }

        #[ink(message)]
        pub fn minter(&self, acc: AccountId) -> bool {
            self.is_minter.get(&acc).unwrap_or(false)
        }

        #[ink(message)]
        pub fn paused(&self) -> bool {
            self.paused_flag
        }

        // -------- write API --------

        /// Privileged mint: caller must be the owner or a registered minter.
        #[ink(message)]
        pub fn mint(&mut self, to_acc: AccountId, amount: Balance) -> Result<()> {
            self.when_not_paused()?;
            let caller_acc = self.env().caller();
            if !self.is_issuer(caller_acc) {
                return Err(Error::Unauthorized)
            }
            self.mint_internal(to_acc, amount)
        }

        /// Burn from `from_acc`: callers may burn their own balance; the
        /// owner and registered minters may burn anyone's.
        #[ink(message)]
        pub fn burn(&mut self, from_acc: AccountId, amount: Balance) -> Result<()> {
            self.when_not_paused()?;
            let caller_acc = self.env().caller();
            if caller_acc != from_acc && !self.is_issuer(caller_acc) {
                return Err(Error::Unauthorized)
            }
            let from_bal = self.balances.get(&from_acc).unwrap_or(0);
            if from_bal < amount {
                return Err(Error::InsufficientBalance)
            }
            let new_from = from_bal.checked_sub(amount).ok_or(Error::Overflow)?;
            let new_total = self.total_supply.checked_sub(amount).ok_or(Error::Overflow)?;
            self.balances.insert(&from_acc, &new_from);
            self.total_supply = new_total;
            self.env().emit_event(Burned { from_acc, amount });
            Ok(())
        }

        /// Zero-amount and self-transfers succeed without touching storage;
        /// both still require `balance(caller) >= amount`.
        #[ink(message)]
        pub fn transfer(&mut self, to_acc: AccountId, amount: Balance) -> Result<()> {
            self.when_not_paused()?;
            let from_acc = self.env().caller();
            self.move_balance(from_acc, to_acc, amount)
        }

        /// Absolute set: calling twice with the same amount leaves the same
        /// allowance. May exceed the owner's balance; enforcement happens in
        /// `transfer_from`.
        #[ink(message)]
        pub fn approve(&mut self, spender_acc: AccountId, amount: Balance) -> Result<()> {
            self.when_not_paused()?;
            let owner_acc = self.env().caller();
            self.allowances.insert(&(owner_acc, spender_acc), &amount);
            self.env().emit_event(Approved { owner_acc, spender_acc, amount });
            Ok(())
        }

        #[ink(message)]
        pub fn increase_allowance(&mut self, spender_acc: AccountId, add_val: Balance) -> Result<()> {
            self.when_not_paused()?;
            let owner_acc = self.env().caller();
            let current_val = self.allowances.get(&(owner_acc, spender_acc)).unwrap_or(0);
            let new_val = current_val.checked_add(add_val).ok_or(Error::Overflow)?;
            self.allowances.insert(&(owner_acc, spender_acc), &new_val);
            self.env().emit_event(Approved { owner_acc, spender_acc, amount: new_val });
            Ok(())
        }

        #[ink(message)]
        pub fn decrease_allowance(&mut self, spender_acc: AccountId, sub_val: Balance) -> Result<()> {
            self.when_not_paused()?;
            let owner_acc = self.env().caller();
            let current_val = self.allowances.get(&(owner_acc, spender_acc)).unwrap_or(0);
            let new_val = current_val.saturating_sub(sub_val);
            self.allowances.insert(&(owner_acc, spender_acc), &new_val);
            self.env().emit_event(Approved { owner_acc, spender_acc, amount: new_val });
            Ok(())
        }

        /// Check order is fixed: allowance of (from, caller) first, then
        /// `from`'s balance. No storage is written until both pass.
        #[ink(message)]
        pub fn transfer_from(
            &mut self,
            from_acc: AccountId,
            to_acc: AccountId,
            amount: Balance,
        ) -> Result<()> {
            self.when_not_paused()?;
            let caller_acc = self.env().caller();
            let current_allow = self.allowances.get(&(from_acc, caller_acc)).unwrap_or(0);
            if current_allow < amount {
                return Err(Error::InsufficientAllowance)
            }
            let new_allow = current_allow.checked_sub(amount).ok_or(Error::Overflow)?;

            self.move_balance(from_acc, to_acc, amount)?;

            self.allowances.insert(&(from_acc, caller_acc), &new_allow);
            Ok(())
        }

        // ---- internals ----

        fn mint_internal(&mut self, to_acc: AccountId, amount: Balance) -> Result<()> {
            // Validate both sums before either write.
            let new_total = self.total_supply.checked_add(amount).ok_or(Error::Overflow)?;
            let to_bal = self.balances.get(&to_acc).unwrap_or(0);
            let new_to = to_bal.checked_add(amount).ok_or(Error::Overflow)?;

            self.total_supply = new_total;
            self.balances.insert(&to_acc, &new_to);

            self.env().emit_event(Minted { to_acc, amount });
            Ok(())
        }

        fn move_balance(&mut self, from_acc: AccountId, to_acc: AccountId, amount: Balance) -> Result<()> {
            let from_bal = self.balances.get(&from_acc).unwrap_or(0);
            if from_bal < amount {
                return Err(Error::InsufficientBalance)
            }
            if from_acc == to_acc || amount == 0 {
                // Funds checked above; nothing moves.
                self.env().emit_event(Transferred { from_acc, to_acc, amount });
                return Ok(())
            }
            let new_from = from_bal.checked_sub(amount).ok_or(Error::Overflow)?;
            let to_bal = self.balances.get(&to_acc).unwrap_or(0);
            let new_to = to_bal.checked_add(amount).ok_or(Error::Overflow)?;

            self.balances.insert(&from_acc, &new_from);
            self.balances.insert(&to_acc, &new_to);

            self.env().emit_event(Transferred { from_acc, to_acc, amount });
            Ok(())
        }
    }


}
